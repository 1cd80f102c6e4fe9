use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::cors::build_cors;
use configs::{AppConfig, ComplaintsConfig};
use service::{auth::StaffRegistry, complaints::ComplaintStore};
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Load the roster and build the complaints service state.
///
/// A missing or unparsable roster aborts startup.
pub async fn build_complaints_state(cfg: &ComplaintsConfig) -> Result<ServerState, StartupError> {
    common::env::require_file(&cfg.users_file).await?;
    let registry = StaffRegistry::load(&cfg.users_file)
        .await
        .map_err(|e| StartupError::Roster(e.to_string()))?;
    let store = ComplaintStore::with_system_clock(cfg.escalation_after_days);
    Ok(ServerState::new(Arc::new(registry), store))
}

fn parse_addr(addr: &str) -> Result<SocketAddr, StartupError> {
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

/// Bind and serve until `shutdown` resolves
async fn serve<F>(name: &'static str, addr: SocketAddr, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service = name, %addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(service = name, "server drained");
    Ok(())
}

/// Public entry: staff / complaints service
pub async fn run_complaints<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = parse_addr(&cfg.complaints.bind_addr())?;
    let state = build_complaints_state(&cfg.complaints).await?;
    info!(
        escalation_after_days = cfg.complaints.escalation_after_days,
        users_file = %cfg.complaints.users_file,
        "complaints service configured"
    );
    let app = routes::build_complaints_router(state, build_cors(None));
    serve("complaints", addr, app, shutdown).await
}

/// Public entry: job board service
pub async fn run_jobs<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = parse_addr(&cfg.jobs.bind_addr())?;
    let cors = build_cors(cfg.jobs.allowed_origins.as_deref());
    let app = routes::build_jobs_router(cors);
    serve("jobs", addr, app, shutdown).await
}
