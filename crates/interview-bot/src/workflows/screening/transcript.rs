use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::scoring::{Assessment, Verdict};

/// One accepted answer, paired with the question it answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

/// Summary record produced once when an interview finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub candidate_name: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(rename = "score")]
    pub average_score: f64,
    pub verdict: Verdict,
    pub responses: Vec<Response>,
    #[serde(rename = "timestamp")]
    pub completed_at: DateTime<Local>,
}

impl Transcript {
    pub fn new(
        candidate_name: impl Into<String>,
        role_name: impl Into<String>,
        assessment: Assessment,
        responses: Vec<Response>,
        completed_at: DateTime<Local>,
    ) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            role_name: role_name.into(),
            average_score: assessment.average_score,
            verdict: assessment.verdict,
            responses,
            completed_at,
        }
    }
}
