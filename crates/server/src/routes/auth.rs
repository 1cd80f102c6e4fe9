use axum::{extract::State, Json};
use serde::Serialize;

use service::auth::domain::{LoginInput, StaffUser};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize)]
pub struct LoginOutput {
    pub message: &'static str,
    pub user: StaffUser,
}

/// Check staff number + PIN against the roster.
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let user = state.auth.login(input).await?;
    Ok(Json(LoginOutput { message: "Login successful", user }))
}
