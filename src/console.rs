use interview_bot::error::AppError;
use interview_bot::workflows::screening::{
    InterviewSession, SessionError, SessionEvent, TranscriptExporter,
};
use std::io::{BufRead, Write};
use tracing::info;

/// Drive one interview over a line-oriented terminal.
///
/// End of input before the last question leaves the session unfinished and nothing is exported.
pub(crate) fn run_interview<E, R, W>(
    session: &mut InterviewSession<E>,
    preset_name: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError>
where
    E: TranscriptExporter,
    R: BufRead,
    W: Write,
{
    let mut preset_name = preset_name;

    loop {
        let name = match preset_name.take() {
            Some(name) => name,
            None => match prompt(input, output, "Enter your name: ")? {
                Some(name) => name,
                None => {
                    writeln!(output, "Interview cancelled.")?;
                    return Ok(());
                }
            },
        };

        match session.start(&name) {
            Ok(events) => {
                render(&events, output)?;
                break;
            }
            Err(SessionError::MissingName) => {
                writeln!(output, "Error: {}", SessionError::MissingName)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    while !session.is_finished() {
        let Some(answer) = prompt(input, output, "> ")? else {
            writeln!(
                output,
                "\nInterview ended after {} of {} questions; no transcript was saved.",
                session.current_index(),
                session.rules().questions.len()
            )?;
            info!(
                answered = session.current_index(),
                "input closed before the interview finished"
            );
            return Ok(());
        };

        let events = session.submit(&answer)?;
        render(&events, output)?;
    }

    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn render<W: Write>(events: &[SessionEvent], output: &mut W) -> Result<(), AppError> {
    for event in events {
        match event {
            SessionEvent::Welcomed { .. } | SessionEvent::AnswerRecorded { .. } => {
                writeln!(output, "{}\n", event.message())?;
            }
            SessionEvent::AnswerRejected { .. } => {
                writeln!(output, "Validation Failed: {}", event.message())?;
            }
            SessionEvent::InterviewCompleted { .. } | SessionEvent::InterviewEndedWithoutScore => {
                writeln!(output, "\n{}", event.message())?;
            }
            _ => writeln!(output, "{}", event.message())?,
        }
    }
    Ok(())
}
