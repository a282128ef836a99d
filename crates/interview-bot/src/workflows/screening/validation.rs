use std::sync::Arc;

use super::rules::{RuleSet, ValidationKind, ValidationRule};

/// Result of checking a candidate answer against the rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected { message: String },
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationOutcome::Accepted => "",
            ValidationOutcome::Rejected { message } => message,
        }
    }
}

/// Stateless checker applying the per-question rules.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    rules: Arc<RuleSet>,
}

impl ValidationEngine {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// The first rule, in file order, whose fragment occurs in `question`.
    pub fn rule_for(&self, question: &str) -> Option<&ValidationRule> {
        let question = question.to_lowercase();
        self.rules
            .validations
            .iter()
            .find(|rule| question.contains(&rule.question_fragment.to_lowercase()))
    }

    pub fn validate(&self, question: &str, answer: &str) -> ValidationOutcome {
        let Some(rule) = self.rule_for(question) else {
            return ValidationOutcome::Accepted;
        };

        match rule.kind {
            ValidationKind::MinWords => {
                if (answer.split_whitespace().count() as u64) < u64::from(rule.value) {
                    ValidationOutcome::Rejected {
                        message: format!("Answer must have at least {} words.", rule.value),
                    }
                } else {
                    ValidationOutcome::Accepted
                }
            }
        }
    }
}
