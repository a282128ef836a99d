mod rules;
mod verdict;

pub use verdict::Verdict;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::RuleSet;
use rules::score_answer;
use verdict::decide_verdict;

/// Deterministic keyword/length scorer driven by the rule set weights.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    rules: Arc<RuleSet>,
}

impl ScoringEngine {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Score a single answer, between 0 and ten times the sum of the weights.
    pub fn score(&self, answer: &str) -> f64 {
        self.breakdown(answer).total
    }

    pub fn breakdown(&self, answer: &str) -> ScoreBreakdown {
        score_answer(answer, &self.rules)
    }

    /// Average every answer's score and derive the verdict.
    pub fn finalize<S: AsRef<str>>(&self, answers: &[S]) -> Result<Assessment, ScoringError> {
        if answers.is_empty() {
            return Err(ScoringError::EmptyResponseSet);
        }

        let mut sum = 0.0;
        for (index, answer) in answers.iter().enumerate() {
            let breakdown = self.breakdown(answer.as_ref());
            debug!(
                answer = index + 1,
                score = breakdown.total,
                deal_breaker = breakdown.deal_breaker.as_deref(),
                "answer scored"
            );
            sum += breakdown.total;
        }

        let average_score = round_to_cents(sum / answers.len() as f64);
        Ok(Assessment {
            average_score,
            verdict: decide_verdict(average_score),
        })
    }
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scoring dimension contributing to an answer's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Communication,
    RoleUnderstanding,
    TechnicalFit,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Communication => "communication",
            ScoreCategory::RoleUnderstanding => "role_understanding",
            ScoreCategory::TechnicalFit => "technical_fit",
        }
    }
}

/// Discrete contribution to an answer's score, kept for audits and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub category: ScoreCategory,
    pub points: f64,
    pub weight: f64,
    pub score: f64,
    pub notes: String,
}

/// Full scoring trail for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// The deal-breaker fragment that zeroed the answer, if any.
    pub deal_breaker: Option<String>,
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

/// Outcome of a finished interview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub average_score: f64,
    pub verdict: Verdict,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no responses were collected, nothing to score")]
    EmptyResponseSet,
}
