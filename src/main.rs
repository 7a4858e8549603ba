mod config;
mod proxy;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Proxy(#[from] proxy::ProxyError),

    #[error("{0}")]
    Router(String),

    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "nourish failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    let proxy = proxy::ApiProxy::new(&config)?;
    if proxy.is_configured() {
        tracing::info!(upstream = ?config.api_upstream, "api proxy enabled");
    } else {
        tracing::warn!("API_UPSTREAM_URL not set, /api requests will answer 503");
    }

    let app = routes::app(proxy).map_err(StartupError::Router)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "nourish listening");
    axum::serve(listener, app).await?;
    Ok(())
}
