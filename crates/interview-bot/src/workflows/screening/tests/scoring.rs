use std::sync::Arc;

use super::common::*;
use crate::workflows::screening::rules::ScoringWeights;
use crate::workflows::screening::scoring::{
    ScoreCategory, ScoringEngine, ScoringError, Verdict,
};

fn engine() -> ScoringEngine {
    ScoringEngine::new(Arc::new(rule_set()))
}

#[test]
fn deal_breaker_zeroes_an_otherwise_strong_answer() {
    let engine = engine();
    let answer = "I love working in a team on python projects but I might quit";

    let breakdown = engine.breakdown(answer);

    assert_eq!(breakdown.total, 0.0);
    assert_eq!(breakdown.deal_breaker.as_deref(), Some("quit"));
    assert!(breakdown.components.is_empty());
    assert_eq!(engine.score(answer), 0.0);
}

#[test]
fn deal_breaker_matches_inside_longer_words() {
    let mut rules = rule_set();
    rules.deal_breakers = vec!["no".to_string()];
    let engine = ScoringEngine::new(Arc::new(rules));

    assert_eq!(engine.score("I can start right now"), 0.0);
}

#[test]
fn short_answer_without_keywords_earns_partial_communication() {
    assert_eq!(engine().score("a"), 5.0);
}

#[test]
fn long_answer_without_keywords_earns_full_communication() {
    assert_eq!(engine().score("b b b b b b"), 10.0);
}

#[test]
fn all_categories_stack_with_weights() {
    let mut rules = rule_set();
    rules.scoring_weights = ScoringWeights {
        communication: 0.5,
        role_understanding: 1.25,
        technical_fit: 2.0,
    };
    let engine = ScoringEngine::new(Arc::new(rules));

    let breakdown = engine.breakdown("I built a Python model with my TEAM last year");

    assert_eq!(breakdown.total, 5.0 + 12.5 + 20.0);
    let categories: Vec<ScoreCategory> = breakdown
        .components
        .iter()
        .map(|component| component.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            ScoreCategory::Communication,
            ScoreCategory::RoleUnderstanding,
            ScoreCategory::TechnicalFit
        ]
    );
    assert!(breakdown.components[1].notes.contains("team"));
}

#[test]
fn score_is_case_insensitive() {
    let engine = engine();
    let lower = engine.score("i want to learn python with the team");
    let upper = engine.score("I WANT TO LEARN PYTHON WITH THE TEAM");
    assert_eq!(lower, upper);
    assert_eq!(lower, 30.0);
}

#[test]
fn score_rounds_to_two_decimals() {
    let mut rules = rule_set();
    rules.scoring_weights.communication = 0.3334;
    let engine = ScoringEngine::new(Arc::new(rules));

    assert_eq!(engine.score("short"), 1.67);
}

#[test]
fn finalize_averages_and_passes_at_threshold() {
    let assessment = engine()
        .finalize(&["a", "b b b b b b"])
        .expect("answers present");

    assert_eq!(assessment.average_score, 7.5);
    assert_eq!(assessment.verdict, Verdict::Pass);
}

#[test]
fn finalize_flags_low_average_for_review() {
    let assessment = engine().finalize(&["a", "I quit"]).expect("answers present");

    assert_eq!(assessment.average_score, 2.5);
    assert_eq!(assessment.verdict, Verdict::ReviewNeeded);
}

#[test]
fn finalize_treats_exactly_six_as_pass() {
    let assessment = engine()
        .finalize(&["a", "b", "c", "d", "e e e e e e"])
        .expect("answers present");

    assert_eq!(assessment.average_score, 6.0);
    assert_eq!(assessment.verdict, Verdict::Pass);
}

#[test]
fn finalize_rejects_empty_response_set() {
    let answers: [&str; 0] = [];
    let err = engine().finalize(&answers).expect_err("no answers");
    assert!(matches!(err, ScoringError::EmptyResponseSet));
}

#[test]
fn verdict_uses_display_labels() {
    assert_eq!(Verdict::Pass.to_string(), "Pass");
    assert_eq!(Verdict::ReviewNeeded.to_string(), "Review Needed");
    assert_eq!(
        serde_json::to_string(&Verdict::ReviewNeeded).expect("serializes"),
        "\"Review Needed\""
    );
}
