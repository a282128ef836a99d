mod cli;
mod console;
mod inspect;

use interview_bot::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
