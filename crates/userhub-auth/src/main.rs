//! userhub auth service
//!
//! - POST /register, POST /login, GET /signin, GET /auth, GET /logout
//! - Sessions held in memory; Postgres via `DATABASE_URI`

use userhub_core::error::UserHubError;
use userhub_core::{config, telemetry, Result};
use userhub_auth::{app_state::AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    let (cfg, source) = config::load()?;
    telemetry::init_tracing(&cfg.logging)?;
    tracing::info!(%source, "config loaded");

    let listen = cfg.server.listen_addr()?;
    let state = AppState::connect(&cfg.database).await?;
    let app = router::build_router(state);

    tracing::info!(%listen, "userhub-auth starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| UserHubError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| UserHubError::Internal(format!("server failed: {e}")))
}
