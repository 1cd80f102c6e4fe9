//! Complaint lifecycle: creation, lazy escalation on read, resolution.

pub mod domain;
pub mod escalation;
pub mod report;
pub mod store;

pub use domain::{Complaint, ComplaintStatus, EscalationRecord, Summary};
pub use store::ComplaintStore;
