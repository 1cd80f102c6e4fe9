use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::errors::ApiError;
use crate::routes::ServerState;

pub async fn complaints_csv(State(state): State<ServerState>) -> Result<impl IntoResponse, ApiError> {
    let body = state.complaints.report_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"complaints_report.csv\""),
        ],
        body,
    ))
}

pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}
