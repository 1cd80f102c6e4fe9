use async_trait::async_trait;

use super::domain::StaffUser;
use super::errors::AuthError;

/// Read-only lookup over the staff roster.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn find_by_staff_no(&self, staff_no: &str) -> Result<Option<StaffUser>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStaffRepository {
        users: Mutex<Vec<StaffUser>>,
        fail: bool,
    }

    impl MockStaffRepository {
        pub fn with_ids(ids: &[&str]) -> Self {
            let users = ids
                .iter()
                .map(|id| StaffUser { staff_no: id.to_string(), profile: Default::default() })
                .collect();
            Self { users: Mutex::new(users), fail: false }
        }

        /// Repository whose every lookup errors.
        pub fn failing() -> Self {
            Self { users: Mutex::new(Vec::new()), fail: true }
        }
    }

    #[async_trait]
    impl StaffRepository for MockStaffRepository {
        async fn find_by_staff_no(&self, staff_no: &str) -> Result<Option<StaffUser>, AuthError> {
            if self.fail {
                return Err(AuthError::Roster("mock failure".into()));
            }
            let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
            Ok(users.iter().find(|u| u.staff_no == staff_no).cloned())
        }
    }
}
