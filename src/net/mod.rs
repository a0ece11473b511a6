//! Network boundary: wire types, errors, configuration, and the two auth
//! transports (HTTP and in-memory mock).

pub mod auth_api;
pub mod config;
pub mod error;
pub mod mock_auth;
pub mod token;
pub mod types;
