//! Records returned by a status query.

use crate::status::InstanceStatus;

/// One match returned by the status source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    /// Identifier reported by the provider.
    pub identifier: String,

    /// Current lifecycle status, if the provider reported one.
    pub status: Option<InstanceStatus>,
}

impl InstanceRecord {
    /// Create a record with a status.
    pub fn new(identifier: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            status: Some(InstanceStatus::new(status)),
        }
    }

    /// Create a record whose status field was absent.
    pub fn without_status(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            status: None,
        }
    }
}
