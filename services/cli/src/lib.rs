mod cli;
mod demo;
mod infra;

use talent_intel::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
