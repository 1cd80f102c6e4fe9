//! Process bootstrap shared by the service binaries.

use std::{fmt::Display, future::Future, pin::Pin, process::ExitCode};

use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

pub type Shutdown = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

fn init_logging(service: &'static str) {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT 等环境变量生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");
}

async fn shutdown_signal(service: &'static str, service_id: Uuid) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(service, event = "signal_error", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(service, event = "shutdown_signal", %service_id, "received Ctrl+C, draining");
}

/// Load config, build the runtime and drive `run` until Ctrl+C.
pub fn launch<F, Fut, E>(service: &'static str, run: F) -> ExitCode
where
    F: FnOnce(AppConfig, Shutdown) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    init_logging(service);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.runtime.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "{service} service starting"
    );

    rt.block_on(async move {
        match run(cfg, Box::pin(shutdown_signal(service, service_id))).await {
            Ok(()) => {
                info!(service, event = "stop", %service_id, pid, "{service} service stopped normally");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service, event = "run_failed", error = %e, "{service} service failed");
                ExitCode::FAILURE
            }
        }
    })
}
