//! Probe Responder
//!
//! The local target the probe runner is pointed at: a keep-alive HTTP
//! server on `127.0.0.1:5000` answering `GET /` with a fixed greeting and
//! `POST /` with canned JSON-RPC results.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;

/// Address used when `RESPONDER_BIND_ADDR` is not set
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "probe_responder=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = api::create_router();

    let addr =
        std::env::var("RESPONDER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}
