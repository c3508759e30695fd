mod cli;
mod infra;
mod offline;
mod routes;
mod server;

use policy_enforcement::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
