//! Scripted screening interview: rule set, answer validation, keyword scoring,
//! the per-candidate state machine, and transcript export.

pub mod export;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod transcript;
pub mod validation;

#[cfg(test)]
mod tests;

pub use export::{
    artifact_stem, ExportError, ExportReceipt, FileTranscriptExporter, TranscriptExporter,
};
pub use rules::{RuleSet, ScoringWeights, ValidationKind, ValidationRule};
pub use scoring::{
    Assessment, ScoreBreakdown, ScoreCategory, ScoreComponent, ScoringEngine, ScoringError,
    Verdict,
};
pub use session::{InterviewSession, SessionError, SessionEvent, SessionState};
pub use transcript::{Response, Transcript};
pub use validation::{ValidationEngine, ValidationOutcome};
