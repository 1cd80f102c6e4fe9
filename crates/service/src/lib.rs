//! Service layer for the staff complaint desk and the job board.
//! - Framework independent: handlers in `server` only translate HTTP.
//! - All state is process-local; nothing survives a restart.

pub mod errors;
pub mod clock;
pub mod auth;
pub mod complaints;
pub mod jobs;
