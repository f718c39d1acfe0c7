//! Upstream service clients

pub mod upstream_client;

pub use upstream_client::{UpstreamClient, UpstreamConfig};
