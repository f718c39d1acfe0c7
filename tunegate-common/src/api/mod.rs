//! API types shared between the mediation layer and the HTTP surface

pub mod types;

pub use types::{ErrorBody, FailureKind, ResponseEnvelope};
