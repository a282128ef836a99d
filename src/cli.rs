use crate::console::run_interview;
use crate::inspect::{check_rules, score_answer};
use clap::{Args, Parser, Subcommand};
use interview_bot::config::AppConfig;
use interview_bot::error::AppError;
use interview_bot::telemetry;
use interview_bot::workflows::screening::{FileTranscriptExporter, InterviewSession, RuleSet};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Interview Bot",
    about = "Run a scripted screening interview from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Conduct an interactive screening interview (default command)
    Interview(InterviewArgs),
    /// Load the rule set and show which validation applies to each question
    Check(RulesArgs),
    /// Print the scoring breakdown for a single answer
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Override the configured rule set file
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InterviewArgs {
    #[command(flatten)]
    pub(crate) rules: RulesArgs,
    /// Override the configured directory for transcripts
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Candidate name; prompted for when omitted
    #[arg(long)]
    pub(crate) name: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) rules: RulesArgs,
    /// Answer text to score
    pub(crate) answer: String,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Interview(InterviewArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let rules_override = match &command {
        Command::Interview(args) => args.rules.rules.clone(),
        Command::Check(args) => args.rules.clone(),
        Command::Score(args) => args.rules.rules.clone(),
    };
    if let Some(path) = rules_override {
        config.interview.rules_path = path;
    }

    let rules = RuleSet::from_path(&config.interview.rules_path)?;
    info!(
        environment = ?config.environment,
        rules = %config.interview.rules_path.display(),
        role = %rules.role_name,
        "rule set ready"
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match command {
        Command::Interview(args) => {
            let export_dir = args.output_dir.unwrap_or(config.interview.export_dir);
            let exporter = Arc::new(FileTranscriptExporter::new(export_dir));
            let mut session = InterviewSession::new(Arc::new(rules), exporter);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_interview(&mut session, args.name, &mut input, &mut output)
        }
        Command::Check(_) => check_rules(&rules, &mut output),
        Command::Score(args) => score_answer(&rules, &args.answer, &mut output),
    }
}
