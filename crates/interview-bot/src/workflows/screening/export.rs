use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use super::transcript::Transcript;

/// Outbound hook persisting a finished transcript (files, a database, an ATS adapter).
pub trait TranscriptExporter: Send + Sync {
    fn export(&self, transcript: &Transcript) -> Result<ExportReceipt, ExportError>;
}

/// Locations of the artifacts an exporter produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReceipt {
    pub artifacts: Vec<PathBuf>,
}

impl ExportReceipt {
    pub fn summary(&self) -> String {
        let names: Vec<String> = self
            .artifacts
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        match names.as_slice() {
            [] => "Transcript exported".to_string(),
            [only] => format!("Responses saved to {only}"),
            [head @ .., last] => format!("Responses saved to {} and {last}", head.join(", ")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unable to create export directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write response table {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("unable to encode summary {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("export target unavailable: {0}")]
    Unavailable(String),
}

/// Writes `{candidate}_responses.csv` and `{candidate}_summary.json` into a directory.
#[derive(Debug, Clone)]
pub struct FileTranscriptExporter {
    output_dir: PathBuf,
}

impl FileTranscriptExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn responses_path(&self, candidate_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_responses.csv", artifact_stem(candidate_name)))
    }

    pub fn summary_path(&self, candidate_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_summary.json", artifact_stem(candidate_name)))
    }

    fn write_responses(&self, transcript: &Transcript, path: &Path) -> Result<(), ExportError> {
        let csv_error = |source| ExportError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
        for response in &transcript.responses {
            writer.serialize(response).map_err(csv_error)?;
        }
        writer.flush().map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_summary(&self, transcript: &Transcript, path: &Path) -> Result<(), ExportError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        transcript
            .serialize(&mut serializer)
            .map_err(|source| ExportError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        fs::write(path, buffer).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TranscriptExporter for FileTranscriptExporter {
    fn export(&self, transcript: &Transcript) -> Result<ExportReceipt, ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let responses_path = self.responses_path(&transcript.candidate_name);
        self.write_responses(transcript, &responses_path)?;

        let summary_path = self.summary_path(&transcript.candidate_name);
        self.write_summary(transcript, &summary_path)?;

        info!(
            candidate = %transcript.candidate_name,
            responses = %responses_path.display(),
            summary = %summary_path.display(),
            "transcript exported"
        );

        Ok(ExportReceipt {
            artifacts: vec![responses_path, summary_path],
        })
    }
}

/// File-name-safe form of a candidate name.
pub fn artifact_stem(candidate_name: &str) -> String {
    let stem: String = candidate_name
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|ch| ch == '.') {
        "candidate".to_string()
    } else {
        stem
    }
}
