//! HTTP server for flag ingestion.
//!
//! One write endpoint behind a static bearer token, plus a liveness probe:
//! - POST /flag-image: authenticate, validate, persist one flag
//! - GET /health: static probe, independent of the store

mod auth;
mod error;
mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::repository::DieselFlagRepository;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub flags: Arc<DieselFlagRepository>,
    /// Shared secret compared against the Authorization header.
    pub api_key: Arc<String>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_api_key()?;
        let ctx = settings.create_db_context();

        Ok(Self {
            flags: Arc::new(ctx.flags()),
            api_key: Arc::new(api_key.to_string()),
        })
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
