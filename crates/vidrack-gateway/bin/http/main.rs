mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use vidrack_core::Repository;
use vidrack_gateway::{App, AppState};
use vidrack_storage::{InMemoryRepository, SqliteRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let repository: Arc<dyn Repository> = match config.storage {
        StorageBackendArg::Sqlite => {
            let repository = SqliteRepository::connect(&config.sqlite_dsn).await?;
            repository.ensure_schema().await?;
            Arc::new(repository)
        }
        StorageBackendArg::InMemory => Arc::new(InMemoryRepository::new()),
    };

    let state = AppState::new(repository);
    let router = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, router).await?;

    Ok(())
}
