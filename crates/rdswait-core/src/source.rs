//! The status-query seam.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::ids::ResourceId;
use crate::instance::InstanceRecord;

/// Maximum number of records requested per status query.
pub const PAGE_SIZE: u32 = 20;

/// External collaborator that reports the current state of instances.
///
/// Implementations perform exactly one request per call and never retry;
/// retry policy belongs to the caller. A call may be dropped mid-flight when
/// the caller is cancelled.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch at most `max_records` instances matching `identifier`.
    async fn describe(
        &self,
        identifier: &ResourceId,
        max_records: u32,
    ) -> Result<Vec<InstanceRecord>, SourceError>;
}
