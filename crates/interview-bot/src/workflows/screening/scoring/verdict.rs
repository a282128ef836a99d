use std::fmt;

use serde::{Deserialize, Serialize};

const PASS_THRESHOLD: f64 = 6.0;

/// Final categorical outcome of the interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    #[serde(rename = "Review Needed")]
    ReviewNeeded,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::ReviewNeeded => "Review Needed",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn decide_verdict(average_score: f64) -> Verdict {
    if average_score >= PASS_THRESHOLD {
        Verdict::Pass
    } else {
        Verdict::ReviewNeeded
    }
}
