use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConfigError;

/// Immutable configuration governing one interview: questions, scoring, and validation.
///
/// Fields are public so callers can assemble a rule set in code; files go through
/// [`RuleSet::from_path`], which enforces the load-time invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub role_name: String,
    pub questions: Vec<String>,
    pub deal_breakers: Vec<String>,
    pub scoring_weights: ScoringWeights,
    pub required_intents: Vec<String>,
    pub validations: Vec<ValidationRule>,
}

/// Per-category multipliers applied to the raw points of each answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub communication: f64,
    pub role_understanding: f64,
    pub technical_fit: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            communication: 1.0,
            role_understanding: 1.0,
            technical_fit: 1.0,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.communication + self.role_understanding + self.technical_fit
    }

    fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("communication", self.communication),
            ("role_understanding", self.role_understanding),
            ("technical_fit", self.technical_fit),
        ]
    }
}

/// Answer constraint attached to every question containing `question_fragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "question")]
    pub question_fragment: String,
    #[serde(rename = "type")]
    pub kind: ValidationKind,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    MinWords,
}

impl RuleSet {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadRules {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), role = %rules.role_name, "rule set loaded");
        Ok(rules)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let rules: RuleSet =
            serde_json::from_str(raw).map_err(|source| ConfigError::ParseRules { source })?;
        rules.normalized()
    }

    /// Lowercase every matching fragment and check the load-time invariants.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        if self.questions.is_empty() {
            return Err(ConfigError::EmptyQuestions);
        }

        for (category, value) in self.scoring_weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { category, value });
            }
        }

        self.deal_breakers = lowercase_fragments(self.deal_breakers, "deal_breakers")?;
        self.required_intents = lowercase_fragments(self.required_intents, "required_intents")?;
        for rule in &mut self.validations {
            if rule.question_fragment.is_empty() {
                return Err(ConfigError::EmptyFragment {
                    field: "validations",
                });
            }
            rule.question_fragment = rule.question_fragment.to_lowercase();
        }

        Ok(self)
    }
}

fn lowercase_fragments(
    fragments: Vec<String>,
    field: &'static str,
) -> Result<Vec<String>, ConfigError> {
    fragments
        .into_iter()
        .map(|fragment| {
            if fragment.is_empty() {
                Err(ConfigError::EmptyFragment { field })
            } else {
                Ok(fragment.to_lowercase())
            }
        })
        .collect()
}
