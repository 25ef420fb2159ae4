//! HTTP and CLI shell over the housing-desk portal library.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use housing_desk::error::AppError;

/// Parse the command line and run the selected command.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
