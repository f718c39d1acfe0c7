//! Request mediator
//!
//! The orchestration pipeline: validate against the catalog, dispatch to
//! the upstream client, normalize the outcome into a response envelope.
//! Holds no mutable state, so a single instance is shared across all
//! concurrent requests without locking.

use std::collections::HashMap;

use tunegate_common::api::ResponseEnvelope;

use crate::catalog::{self, OperationId};
use crate::services::UpstreamClient;

/// Maps logical operations onto upstream calls and produces a uniform
/// envelope for every outcome
pub struct RequestMediator {
    client: UpstreamClient,
}

impl RequestMediator {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// Mediate one logical operation.
    ///
    /// Validation failures return before any network activity. Upstream
    /// failure kinds pass through unchanged; the payload of a successful
    /// call is opaque to this layer. Side-effect-free beyond the single
    /// upstream call, so identical inputs against a deterministic
    /// upstream yield identical envelopes.
    pub async fn mediate(
        &self,
        op: OperationId,
        params: &HashMap<String, String>,
    ) -> ResponseEnvelope {
        let spec = match catalog::resolve(op, params) {
            Ok(spec) => spec,
            Err(err) => {
                tracing::debug!(operation = op.as_str(), error = %err, "validation failed");
                return err.into();
            }
        };

        tracing::debug!(operation = op.as_str(), path = %spec.path, "mediating operation");

        match self.client.fetch(&spec).await {
            Ok(payload) => ResponseEnvelope::ok(payload),
            Err(err) => err.into(),
        }
    }
}
