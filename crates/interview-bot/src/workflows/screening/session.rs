use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use super::export::{ExportReceipt, TranscriptExporter};
use super::rules::RuleSet;
use super::scoring::{ScoringEngine, ScoringError, Verdict};
use super::transcript::{Response, Transcript};
use super::validation::{ValidationEngine, ValidationOutcome};

/// Lifecycle of a single candidate run. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Finished,
}

/// Notifications for the presentation layer, in the order they should be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Welcomed {
        candidate_name: String,
        role_name: String,
    },
    QuestionAsked {
        index: usize,
        text: String,
    },
    /// The answer failed a per-question rule; the same question stays open.
    AnswerRejected {
        message: String,
    },
    AnswerRecorded {
        index: usize,
        candidate_name: String,
        answer: String,
    },
    InterviewCompleted {
        average_score: f64,
        verdict: Verdict,
    },
    /// The rule set had no questions, so the session closed without a score or export.
    InterviewEndedWithoutScore,
    TranscriptExported {
        receipt: ExportReceipt,
    },
    ExportFailed {
        message: String,
    },
}

impl SessionEvent {
    /// Display text for the event.
    pub fn message(&self) -> String {
        match self {
            SessionEvent::Welcomed {
                candidate_name,
                role_name,
            } => format!(
                "Hello {candidate_name}, welcome to the {role_name} interview!\n\
                 I'll ask you a few screening questions. Please answer below."
            ),
            SessionEvent::QuestionAsked { index, text } => format!("Q{}: {text}", index + 1),
            SessionEvent::AnswerRejected { message } => message.clone(),
            SessionEvent::AnswerRecorded {
                candidate_name,
                answer,
                ..
            } => format!("{candidate_name}: {answer}"),
            SessionEvent::InterviewCompleted {
                average_score,
                verdict,
            } => format!(
                "Interview Finished!\nAverage Score: {}\nVerdict: {verdict}",
                format_score(*average_score)
            ),
            SessionEvent::InterviewEndedWithoutScore => {
                "Interview Finished!\nNo questions were configured, so there is nothing to score."
                    .to_string()
            }
            SessionEvent::TranscriptExported { receipt } => receipt.summary(),
            SessionEvent::ExportFailed { message } => {
                format!("Unable to save the transcript: {message}")
            }
        }
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

/// Commands issued in the wrong state, or a start without a name.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter your name to continue.")]
    MissingName,
    #[error("the interview has not been started")]
    NotStarted,
    #[error("the interview is already in progress")]
    AlreadyStarted,
    #[error("the interview is finished and accepts no further input")]
    SessionClosed,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// State machine walking one candidate through the rule set's questions.
pub struct InterviewSession<E> {
    rules: Arc<RuleSet>,
    validator: ValidationEngine,
    scorer: ScoringEngine,
    exporter: Arc<E>,
    state: SessionState,
    candidate_name: String,
    current_index: usize,
    responses: Vec<Response>,
    transcript: Option<Transcript>,
}

impl<E> InterviewSession<E>
where
    E: TranscriptExporter,
{
    pub fn new(rules: Arc<RuleSet>, exporter: Arc<E>) -> Self {
        Self {
            validator: ValidationEngine::new(rules.clone()),
            scorer: ScoringEngine::new(rules.clone()),
            rules,
            exporter,
            state: SessionState::NotStarted,
            candidate_name: String::new(),
            current_index: 0,
            responses: Vec::new(),
            transcript: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn candidate_name(&self) -> Option<&str> {
        match self.state {
            SessionState::NotStarted => None,
            _ => Some(&self.candidate_name),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question awaiting an answer, if the session is in progress.
    pub fn current_question(&self) -> Option<&str> {
        match self.state {
            SessionState::InProgress => self
                .rules
                .questions
                .get(self.current_index)
                .map(String::as_str),
            _ => None,
        }
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Available once the interview finishes with at least one answer.
    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn start(&mut self, name: &str) -> Result<Vec<SessionEvent>, SessionError> {
        match self.state {
            SessionState::NotStarted => {}
            SessionState::InProgress => return Err(SessionError::AlreadyStarted),
            SessionState::Finished => return Err(SessionError::SessionClosed),
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::MissingName);
        }

        self.candidate_name = name.to_string();
        self.state = SessionState::InProgress;
        info!(
            candidate = %self.candidate_name,
            role = %self.rules.role_name,
            questions = self.rules.questions.len(),
            "interview started"
        );

        let mut events = vec![SessionEvent::Welcomed {
            candidate_name: self.candidate_name.clone(),
            role_name: self.rules.role_name.clone(),
        }];

        if self.rules.questions.is_empty() {
            warn!("rule set has no questions, closing interview without a score");
            self.state = SessionState::Finished;
            events.push(SessionEvent::InterviewEndedWithoutScore);
            return Ok(events);
        }

        events.push(self.question_event());
        Ok(events)
    }

    /// Submit an answer to the current question.
    ///
    /// A blank answer is a no-op: it returns no events and leaves the state untouched.
    pub fn submit(&mut self, answer: &str) -> Result<Vec<SessionEvent>, SessionError> {
        match self.state {
            SessionState::InProgress => {}
            SessionState::NotStarted => return Err(SessionError::NotStarted),
            SessionState::Finished => return Err(SessionError::SessionClosed),
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(Vec::new());
        }

        let question = self.rules.questions[self.current_index].clone();
        if let ValidationOutcome::Rejected { message } = self.validator.validate(&question, answer)
        {
            info!(question = self.current_index + 1, %message, "answer rejected");
            return Ok(vec![SessionEvent::AnswerRejected { message }]);
        }

        let index = self.current_index;
        self.responses.push(Response {
            question,
            answer: answer.to_string(),
        });
        self.current_index += 1;

        let mut events = vec![SessionEvent::AnswerRecorded {
            index,
            candidate_name: self.candidate_name.clone(),
            answer: answer.to_string(),
        }];

        if self.current_index == self.rules.questions.len() {
            events.extend(self.finish()?);
        } else {
            events.push(self.question_event());
        }

        Ok(events)
    }

    fn question_event(&self) -> SessionEvent {
        SessionEvent::QuestionAsked {
            index: self.current_index,
            text: self.rules.questions[self.current_index].clone(),
        }
    }

    fn finish(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        self.state = SessionState::Finished;

        let answers: Vec<&str> = self
            .responses
            .iter()
            .map(|response| response.answer.as_str())
            .collect();
        let assessment = self.scorer.finalize(&answers)?;

        info!(
            candidate = %self.candidate_name,
            average_score = assessment.average_score,
            verdict = %assessment.verdict,
            "interview finished"
        );

        let transcript = Transcript::new(
            self.candidate_name.clone(),
            self.rules.role_name.clone(),
            assessment,
            self.responses.clone(),
            Local::now(),
        );

        let mut events = vec![SessionEvent::InterviewCompleted {
            average_score: assessment.average_score,
            verdict: assessment.verdict,
        }];

        match self.exporter.export(&transcript) {
            Ok(receipt) => events.push(SessionEvent::TranscriptExported { receipt }),
            Err(err) => {
                let message = error_chain(&err);
                warn!(
                    candidate = %self.candidate_name,
                    error = %message,
                    "transcript export failed"
                );
                events.push(SessionEvent::ExportFailed { message });
            }
        }

        self.transcript = Some(transcript);
        Ok(events)
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
