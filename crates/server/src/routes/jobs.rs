use axum::{http::StatusCode, Json};
use serde_json::Value;

use common::types::Health;
use service::jobs::{self, Job, JobAck};

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn list() -> Json<Vec<Job>> {
    Json(jobs::catalog())
}

/// Echo the submitted body back; nothing is stored.
pub async fn create(Json(body): Json<Value>) -> (StatusCode, Json<JobAck>) {
    (StatusCode::CREATED, Json(jobs::echo(body)))
}
