//! Shared types for the tunegate gateway
//!
//! Holds the response envelope contract the gateway guarantees to its
//! clients, plus configuration and error types used across the workspace.

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
