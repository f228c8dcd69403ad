mod cli;
mod client;
mod demo;
mod infra;
mod routes;
mod server;

use hsga_portal::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
