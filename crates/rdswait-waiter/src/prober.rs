//! Single status probe with response validation and error classification.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use rdswait_core::{InstanceStatus, ProbeError, ResourceId, SourceError, StatusSource, PAGE_SIZE};

/// Wraps a [`StatusSource`] and turns its answers into a status or a
/// [`ProbeError`]. Never retries.
pub struct Prober<S: ?Sized> {
    source: Arc<S>,
}

impl<S: StatusSource + ?Sized> Prober<S> {
    /// Create a prober over an injected status source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch the current status of `identifier`.
    ///
    /// The request is raced against `cancel`; cancellation wins ties, so an
    /// already-cancelled token returns [`ProbeError::Cancelled`] without
    /// issuing a request.
    pub async fn probe(
        &self,
        identifier: &ResourceId,
        cancel: &CancellationToken,
    ) -> Result<InstanceStatus, ProbeError> {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ProbeError::Cancelled),
            result = self.source.describe(identifier, PAGE_SIZE) => result,
        };

        let mut records = match result {
            Ok(records) => records,
            // The source may notice cancellation before we do.
            Err(_) if cancel.is_cancelled() => return Err(ProbeError::Cancelled),
            Err(e) => return Err(classify(e)),
        };
        debug!(identifier = %identifier, matches = records.len(), "Status query returned");

        match records.len() {
            0 => Err(ProbeError::NotFound(identifier.clone())),
            1 => records
                .pop()
                .and_then(|record| record.status)
                .ok_or_else(|| ProbeError::MissingStatus(identifier.clone())),
            matches => Err(ProbeError::Ambiguous {
                identifier: identifier.clone(),
                matches,
            }),
        }
    }
}

fn classify(e: SourceError) -> ProbeError {
    match e {
        SourceError::Cancelled => ProbeError::Cancelled,
        e @ SourceError::Provider { .. } => ProbeError::Transient(e),
        e @ (SourceError::Malformed(_) | SourceError::InvalidRequest(_)) => ProbeError::Fatal(e),
    }
}
