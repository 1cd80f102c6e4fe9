use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use common::types::Message;
use service::complaints::{Complaint, EscalationRecord, Summary};
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::routes::ServerState;

const NOT_FOUND: &str = "Complaint not found";

/// 列出全部投诉（先执行升级检查）
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Complaint>> {
    Json(state.complaints.list().await)
}

/// 登记新投诉；只返回确认信息
pub async fn create(
    State(state): State<ServerState>,
    Json(fields): Json<Map<String, Value>>,
) -> (StatusCode, Json<Message>) {
    state.complaints.create(fields).await;
    (StatusCode::CREATED, Json(Message::new("Complaint added")))
}

/// 标记为已解决。非整数 id 与不存在的 id 一样返回 404
pub async fn resolve(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id: u64 = raw_id.parse().map_err(|_| ApiError::NotFound(NOT_FOUND.into()))?;
    state.complaints.resolve(id).await.map_err(|e| match e {
        ServiceError::NotFound(_) => ApiError::NotFound(NOT_FOUND.into()),
        other => other.into(),
    })?;
    Ok(Json(Message::new(format!("Complaint {id} marked as resolved"))))
}

pub async fn summary(State(state): State<ServerState>) -> Json<Summary> {
    Json(state.complaints.summary().await)
}

#[derive(Debug, Default, Deserialize)]
pub struct EscalationsQuery {
    pub recent: Option<String>,
}

impl EscalationsQuery {
    fn wants_recent(&self) -> bool {
        match self.recent.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"),
        }
    }
}

pub async fn escalations(
    State(state): State<ServerState>,
    Query(q): Query<EscalationsQuery>,
) -> Json<Vec<EscalationRecord>> {
    let records = if q.wants_recent() {
        state.complaints.recent_escalations().await
    } else {
        state.complaints.escalations(None).await
    };
    Json(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_flag_parsing() {
        let q = |v: Option<&str>| EscalationsQuery { recent: v.map(String::from) }.wants_recent();
        assert!(!q(None));
        assert!(!q(Some("")));
        assert!(!q(Some("false")));
        assert!(!q(Some("0")));
        assert!(q(Some("true")));
        assert!(q(Some("1")));
        assert!(q(Some("yes")));
    }
}
