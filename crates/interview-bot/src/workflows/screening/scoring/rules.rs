use super::super::rules::RuleSet;
use super::{round_to_cents, ScoreBreakdown, ScoreCategory, ScoreComponent};

const TECHNICAL_KEYWORDS: [&str; 3] = ["python", "project", "model"];
const VERBOSE_ANSWER_WORDS: usize = 5;

const FULL_POINTS: f64 = 10.0;
const PARTIAL_POINTS: f64 = 5.0;

// Fragments match as plain substrings of the lowercased answer, so "no" matches inside "now".
pub(crate) fn score_answer(answer: &str, rules: &RuleSet) -> ScoreBreakdown {
    let lowered = answer.to_lowercase();

    if let Some(fragment) = first_match(&lowered, &rules.deal_breakers) {
        return ScoreBreakdown {
            deal_breaker: Some(fragment.to_string()),
            components: Vec::new(),
            total: 0.0,
        };
    }

    let weights = &rules.scoring_weights;
    let mut components = Vec::with_capacity(3);

    let word_count = answer.split_whitespace().count();
    let (points, notes) = if word_count > VERBOSE_ANSWER_WORDS {
        (FULL_POINTS, format!("{word_count} words, detailed answer"))
    } else {
        (
            PARTIAL_POINTS,
            format!("{word_count} words, at most {VERBOSE_ANSWER_WORDS}"),
        )
    };
    components.push(component(
        ScoreCategory::Communication,
        points,
        weights.communication,
        notes,
    ));

    let (points, notes) = match first_match(&lowered, &rules.required_intents) {
        Some(intent) => (FULL_POINTS, format!("mentions '{intent}'")),
        None => (0.0, "no required intent mentioned".to_string()),
    };
    components.push(component(
        ScoreCategory::RoleUnderstanding,
        points,
        weights.role_understanding,
        notes,
    ));

    let (points, notes) = match first_match(&lowered, &TECHNICAL_KEYWORDS) {
        Some(keyword) => (FULL_POINTS, format!("mentions '{keyword}'")),
        None => (0.0, "no technical keyword mentioned".to_string()),
    };
    components.push(component(
        ScoreCategory::TechnicalFit,
        points,
        weights.technical_fit,
        notes,
    ));

    let total = round_to_cents(components.iter().map(|component| component.score).sum());

    ScoreBreakdown {
        deal_breaker: None,
        components,
        total,
    }
}

fn component(category: ScoreCategory, points: f64, weight: f64, notes: String) -> ScoreComponent {
    ScoreComponent {
        category,
        points,
        weight,
        score: weight * points,
        notes,
    }
}

fn first_match<'a, S: AsRef<str>>(lowered: &str, fragments: &'a [S]) -> Option<&'a str> {
    fragments
        .iter()
        .map(|fragment| fragment.as_ref())
        .find(|fragment| lowered.contains(&fragment.to_lowercase()))
}
