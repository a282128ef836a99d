use std::sync::{Arc, Mutex};

use crate::workflows::screening::export::{
    ExportError, ExportReceipt, TranscriptExporter,
};
use crate::workflows::screening::rules::{
    RuleSet, ScoringWeights, ValidationKind, ValidationRule,
};
use crate::workflows::screening::session::InterviewSession;
use crate::workflows::screening::transcript::Transcript;

pub(super) fn min_words(fragment: &str, value: u32) -> ValidationRule {
    ValidationRule {
        question_fragment: fragment.to_string(),
        kind: ValidationKind::MinWords,
        value,
    }
}

pub(super) fn rule_set() -> RuleSet {
    RuleSet {
        role_name: "Data Scientist".to_string(),
        questions: vec![
            "Describe your last project".to_string(),
            "Why do you want this role?".to_string(),
            "When can you start?".to_string(),
        ],
        deal_breakers: vec!["quit".to_string(), "not interested".to_string()],
        scoring_weights: ScoringWeights::default(),
        required_intents: vec!["team".to_string(), "learn".to_string()],
        validations: vec![min_words("describe", 3)],
    }
}

pub(super) fn single_question_rules() -> RuleSet {
    RuleSet {
        role_name: "Analyst".to_string(),
        questions: vec!["Tell us about yourself".to_string()],
        deal_breakers: vec!["quit".to_string()],
        scoring_weights: ScoringWeights::default(),
        required_intents: vec!["team".to_string()],
        validations: Vec::new(),
    }
}

#[derive(Default)]
pub(super) struct RecordingExporter {
    transcripts: Mutex<Vec<Transcript>>,
}

impl RecordingExporter {
    pub(super) fn transcripts(&self) -> Vec<Transcript> {
        self.transcripts
            .lock()
            .expect("exporter mutex poisoned")
            .clone()
    }
}

impl TranscriptExporter for RecordingExporter {
    fn export(&self, transcript: &Transcript) -> Result<ExportReceipt, ExportError> {
        self.transcripts
            .lock()
            .expect("exporter mutex poisoned")
            .push(transcript.clone());
        Ok(ExportReceipt {
            artifacts: vec![format!("{}.json", transcript.candidate_name).into()],
        })
    }
}

pub(super) struct FailingExporter;

impl TranscriptExporter for FailingExporter {
    fn export(&self, _transcript: &Transcript) -> Result<ExportReceipt, ExportError> {
        Err(ExportError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn session_with(
    rules: RuleSet,
) -> (InterviewSession<RecordingExporter>, Arc<RecordingExporter>) {
    let exporter = Arc::new(RecordingExporter::default());
    let session = InterviewSession::new(Arc::new(rules), exporter.clone());
    (session, exporter)
}
