//! HTTP API handlers for tunegate-gw
//!
//! Mechanical dispatch only: handlers extract parameters, call the
//! mediator, and serialize the envelope. All request semantics live in
//! the catalog and the upstream client.

pub mod catalog;
pub mod health;

pub use catalog::catalog_routes;
pub use health::health_routes;
