//! Mediation error type
//!
//! Every failure the mediation layer can produce, one variant per
//! [`FailureKind`]. Failures are data, never faults: the mediator converts
//! each error into a failure envelope, so nothing here ever escapes to the
//! process level.

use thiserror::Error;
use tunegate_common::api::{FailureKind, ResponseEnvelope};

/// Classified mediation failure
#[derive(Debug, Error)]
pub enum MediationError {
    /// Missing or empty required parameter; generated locally, never
    /// reaches the network
    #[error("{0}")]
    Validation(String),

    /// Upstream call exceeded the configured timeout
    #[error("upstream request timed out: {0}")]
    Timeout(String),

    /// Connection failure or non-2xx upstream status
    #[error("upstream transport failure: {0}")]
    Transport(String),

    /// 2xx upstream response whose body was not parseable JSON
    #[error("unparseable upstream payload: {0}")]
    BadUpstreamPayload(String),

    /// Upstream parsed cleanly but reported failure itself
    #[error("{0}")]
    UpstreamReported(String),

    /// Upstream explicitly signalled the entity does not exist
    #[error("{0}")]
    NotFound(String),
}

impl MediationError {
    /// Failure classification for the response envelope
    pub fn kind(&self) -> FailureKind {
        match self {
            MediationError::Validation(_) => FailureKind::Validation,
            MediationError::Timeout(_) => FailureKind::Timeout,
            MediationError::Transport(_) => FailureKind::Transport,
            MediationError::BadUpstreamPayload(_) => FailureKind::BadUpstreamPayload,
            MediationError::UpstreamReported(_) => FailureKind::UpstreamReportedFailure,
            MediationError::NotFound(_) => FailureKind::NotFound,
        }
    }
}

impl From<MediationError> for ResponseEnvelope {
    fn from(err: MediationError) -> Self {
        ResponseEnvelope::failure(err.kind(), err.to_string())
    }
}
