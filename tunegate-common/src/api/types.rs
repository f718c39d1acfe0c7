//! Response envelope types
//!
//! Every call into the mediation layer produces exactly one
//! [`ResponseEnvelope`], success or failure. The presentation layer
//! serializes the envelope verbatim as the HTTP response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification attached to every non-success envelope.
///
/// This is a closed set: clients may rely on never seeing another value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Caller supplied a missing or empty required parameter.
    /// Never incurs an upstream call.
    Validation,
    /// The upstream call exceeded the configured timeout
    Timeout,
    /// Connection failure or non-2xx upstream status
    Transport,
    /// Upstream returned 2xx but the body was not parseable JSON
    BadUpstreamPayload,
    /// Upstream parsed cleanly but its own success flag was false
    UpstreamReportedFailure,
    /// Upstream explicitly signalled that the requested entity does not exist
    NotFound,
}

impl FailureKind {
    /// Wire name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "validation",
            FailureKind::Timeout => "timeout",
            FailureKind::Transport => "transport",
            FailureKind::BadUpstreamPayload => "bad_upstream_payload",
            FailureKind::UpstreamReportedFailure => "upstream_reported_failure",
            FailureKind::NotFound => "not_found",
        }
    }
}

/// Error half of a failure envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure classification
    pub kind: FailureKind,
    /// Human-readable cause
    pub message: String,
}

/// The only type ever returned to the presentation layer.
///
/// Exactly one of `data` / `error` is populated; the constructors are the
/// only way envelopes are built, which keeps that invariant out of reach
/// of handler code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the mediated operation succeeded
    pub success: bool,
    /// Opaque upstream payload (present iff `success`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Failure classification and message (present iff `!success`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl ResponseEnvelope {
    /// Success envelope wrapping an opaque upstream payload
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope with a classified error
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                kind,
                message: message.into(),
            }),
        }
    }

    /// Failure kind, if this is a failure envelope
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}
