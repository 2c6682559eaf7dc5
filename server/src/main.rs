#![recursion_limit = "256"]

mod config;
mod routes;

use thiserror::Error;

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::leptos_app().map_err(ServerError::Leptos)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "landwise listening");
    axum::serve(listener, app).await?;
    Ok(())
}
