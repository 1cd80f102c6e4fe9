//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Staff login against the roster loaded at startup. There is no hashing and
//! no session: each login is a single stateless check.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod registry;
pub mod service;

pub use registry::StaffRegistry;
pub use service::AuthService;
