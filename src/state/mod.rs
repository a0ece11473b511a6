//! Shared client-side state modules.
//!
//! State is split by domain (`auth`, `events`) so individual components can
//! depend on small focused models.

pub mod auth;
pub mod events;
