//! Upstream catalog API client
//!
//! Owns the upstream base address and timeout policy. One operation:
//! perform a GET against an upstream path and classify whatever comes
//! back. The upstream is untrusted and varies in shape across
//! deployments, so every exit path returns a classified outcome; nothing
//! is allowed to escape unclassified.

use std::time::Duration;

use serde_json::Value;
use tunegate_common::Error;

use crate::catalog::UpstreamRequestSpec;
use crate::error::MediationError;

/// Default per-call upstream timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Upstream connection settings, injected at construction.
///
/// Never ambient process state: tests substitute a config pointing at a
/// local mock upstream.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the upstream catalog API (no trailing slash)
    pub base_url: String,
    /// Single global per-call timeout; no per-operation override
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// HTTP client for the upstream catalog API
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a pooled client bound to the configured base URL and timeout
    pub fn new(config: &UpstreamConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("HTTP client construction failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a single GET for the resolved spec and classify the outcome.
    ///
    /// No retries: a failed attempt is surfaced immediately.
    pub async fn fetch(&self, spec: &UpstreamRequestSpec) -> Result<Value, MediationError> {
        let url = format!("{}{}", self.base_url, spec.path);

        tracing::debug!(url = %url, "dispatching upstream request");

        let response = self
            .http
            .get(&url)
            .query(&spec.query)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "upstream returned error status");
            return Err(MediationError::Transport(format!(
                "upstream returned HTTP {}: {}",
                status.as_u16(),
                truncate(&body, 200)
            )));
        }

        // The timeout also bounds body collection, so a stalled body read
        // still classifies as a timeout
        let payload: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                MediationError::Timeout(e.to_string())
            } else {
                MediationError::BadUpstreamPayload(e.to_string())
            }
        })?;

        check_upstream_success(payload, spec.lookup)
    }
}

/// Transport-level error classification, timeouts distinguished
fn classify_reqwest_error(e: reqwest::Error) -> MediationError {
    if e.is_timeout() {
        MediationError::Timeout(e.to_string())
    } else {
        MediationError::Transport(e.to_string())
    }
}

/// Inspect the upstream's own success flag, when it embeds one.
///
/// Detection is best-effort: only an explicit top-level boolean counts.
/// A payload without the flag passes through untouched. When the flag is
/// false and the operation was an identifier lookup, an upstream message
/// explicitly saying "not found" upgrades the failure to `NotFound`; no
/// further heuristics are applied.
fn check_upstream_success(payload: Value, lookup: bool) -> Result<Value, MediationError> {
    match payload.get("success").and_then(Value::as_bool) {
        Some(true) => {
            // Hoist the upstream's own data member so clients are not
            // handed a double-wrapped envelope
            match payload {
                Value::Object(mut map) => match map.remove("data") {
                    Some(data) => Ok(data),
                    None => Ok(Value::Object(map)),
                },
                other => Ok(other),
            }
        }
        Some(false) => {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("upstream reported failure without a message")
                .to_string();

            tracing::warn!(message = %message, "upstream reported failure");

            if lookup && message.to_lowercase().contains("not found") {
                Err(MediationError::NotFound(message))
            } else {
                Err(MediationError::UpstreamReported(message))
            }
        }
        None => Ok(payload),
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
