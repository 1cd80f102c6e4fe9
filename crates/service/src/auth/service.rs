use std::sync::Arc;

use common::metrics::{STAFF_LOGINS_TOTAL, STAFF_LOGIN_FAILURES_TOTAL};
use tracing::{debug, info, instrument, warn};

use super::domain::{LoginInput, StaffUser};
use super::errors::AuthError;
use super::repository::StaffRepository;

/// Number of leading characters of the staff number that form the PIN.
pub const PIN_LEN: usize = 4;

/// PIN accepted for a staff number: its first four characters, or the whole
/// number when it is shorter.
pub fn expected_pin(staff_no: &str) -> String {
    staff_no.chars().take(PIN_LEN).collect()
}

/// Staff login service independent of web framework
pub struct AuthService<R: StaffRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StaffRepository + ?Sized> Clone for AuthService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: StaffRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Authenticate a staff member by staff number and PIN.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockStaffRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockStaffRepository::with_ids(&["86001"]));
    /// let svc = AuthService::new(repo);
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let user = rt.block_on(svc.login(LoginInput::new("86001", "8600"))).unwrap();
    /// assert_eq!(user.staff_no, "86001");
    /// assert!(rt.block_on(svc.login(LoginInput::new("86001", "86001"))).is_err());
    /// ```
    #[instrument(skip(self, input), fields(staff_no = input.staff_no().unwrap_or("")))]
    pub async fn login(&self, input: LoginInput) -> Result<StaffUser, AuthError> {
        let result = self.check(input).await;
        match &result {
            Ok(user) => {
                STAFF_LOGINS_TOTAL.inc();
                info!(staff_no = %user.staff_no, "staff_login");
            }
            Err(e) => {
                STAFF_LOGIN_FAILURES_TOTAL.inc();
                warn!(code = e.code(), error = %e, "staff_login_rejected");
            }
        }
        result
    }

    async fn check(&self, input: LoginInput) -> Result<StaffUser, AuthError> {
        // absent or non-string values never match
        let (Some(staff_no), Some(password)) = (input.staff_no(), input.password()) else {
            debug!("credentials missing or not strings");
            return Err(AuthError::InvalidCredentials);
        };

        let user = self.repo
            .find_by_staff_no(staff_no)
            .await?
            .ok_or_else(|| {
                debug!("unknown staff number");
                AuthError::InvalidCredentials
            })?;

        if password != expected_pin(staff_no) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }
}
