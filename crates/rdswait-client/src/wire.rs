//! JSON documents exchanged with the status endpoint.

use serde::Deserialize;

use rdswait_core::{InstanceRecord, InstanceStatus};

/// Provider error code signalling that the request was aborted.
pub(crate) const REQUEST_CANCELED: &str = "RequestCanceled";

/// Body of a successful describe call.
#[derive(Debug, Deserialize)]
pub(crate) struct DescribeResponse {
    #[serde(rename = "DBInstances", default)]
    db_instances: Option<Vec<DbInstance>>,
}

impl DescribeResponse {
    /// Matched instances; an absent or null list means no matches.
    pub(crate) fn into_instances(self) -> Vec<DbInstance> {
        self.db_instances.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DbInstance {
    #[serde(rename = "DBInstanceIdentifier", default)]
    pub identifier: String,

    #[serde(rename = "DBInstanceStatus", default)]
    pub status: Option<String>,
}

impl From<DbInstance> for InstanceRecord {
    fn from(instance: DbInstance) -> Self {
        InstanceRecord {
            identifier: instance.identifier,
            status: instance.status.map(InstanceStatus::new),
        }
    }
}

/// Body of a failed call, when the provider sends one.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDocument {
    #[serde(rename = "Error")]
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(rename = "Code")]
    pub code: String,

    #[serde(rename = "Message", default)]
    pub message: String,
}
