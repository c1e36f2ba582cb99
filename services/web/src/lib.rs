mod cli;
mod infra;
mod routes;
mod server;

use crimedb_home::error::AppError;

pub use routes::home_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
