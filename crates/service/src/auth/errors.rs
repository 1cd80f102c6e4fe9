use thiserror::Error;

/// Business errors for staff login
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("staff roster error: {0}")]
    Roster(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 1004,
            AuthError::Roster(_) => 1200,
        }
    }
}
