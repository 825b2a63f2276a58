mod cli;
mod console;
pub mod infra;
pub mod routes;
mod server;

use auditor_registry::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
