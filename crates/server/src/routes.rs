use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::TimedHealth;

pub mod auth;
pub mod complaints;
pub mod jobs;
pub mod reports;
pub mod state;

pub use state::ServerState;

pub async fn health() -> Json<TimedHealth> {
    Json(TimedHealth {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Staff / complaints service router.
pub fn build_complaints_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/complaints", get(complaints::list).post(complaints::create))
        .route("/api/complaints/:id/resolve", post(complaints::resolve))
        .route("/api/summary", get(complaints::summary))
        .route("/api/escalations", get(complaints::escalations))
        .route("/api/reports.csv", get(reports::complaints_csv));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(reports::metrics));

    // Compose
    observe(ops.merge(api).with_state(state).layer(cors))
}

/// Job board router; stateless.
pub fn build_jobs_router(cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/api/health", get(jobs::health))
        .route("/api/jobs", get(jobs::list).post(jobs::create))
        .layer(cors);
    observe(router)
}

fn observe(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // 响应返回时打点，包含状态码与耗时
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            // 失败（5xx 等）时以 ERROR 记录
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
