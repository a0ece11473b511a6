//! Page components, one per route.

pub mod feed;
pub mod login;
pub mod register;
