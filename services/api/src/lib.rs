mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use relocation_tools::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
