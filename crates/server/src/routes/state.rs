use std::sync::Arc;

use service::auth::{repository::StaffRepository, AuthService};
use service::complaints::ComplaintStore;

/// Shared state of the complaints service, injected into handlers via `State`.
#[derive(Clone)]
pub struct ServerState {
    pub auth: AuthService<dyn StaffRepository>,
    pub complaints: Arc<ComplaintStore>,
}

impl ServerState {
    pub fn new(staff: Arc<dyn StaffRepository>, complaints: Arc<ComplaintStore>) -> Self {
        Self { auth: AuthService::new(staff), complaints }
    }
}
