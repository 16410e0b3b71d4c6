//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: the [`Link`] mapping a short code to
//! its destination. `NewLink` carries the fields a caller may set at creation;
//! everything else (counters, timestamps, the deleted flag) is owned by the
//! storage layer.

pub mod link;

pub use link::{Link, NewLink};
