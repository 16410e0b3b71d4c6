//! Application layer services implementing business logic.
//!
//! Services consume the repository and resolver traits and provide a clean
//! API for HTTP handlers:
//!
//! - [`services::link_service::LinkService`] - shorten, delete, list, health probe
//! - [`services::redirect_service::RedirectService`] - visit-time resolution

pub mod services;
