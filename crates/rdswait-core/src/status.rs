//! Lifecycle status reported for a watched instance.

use std::fmt;

/// The one status value that ends a wait successfully.
pub const TARGET_STATUS: &str = "available";

/// Status string reported by the status source.
///
/// No enumeration is enforced: providers add lifecycle states over time
/// (`creating`, `backing-up`, `modifying`, ...) and every value other than
/// [`TARGET_STATUS`] simply means "not ready yet".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceStatus(String);

impl InstanceStatus {
    /// Create a new InstanceStatus from a string.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the target state.
    pub fn is_available(&self) -> bool {
        self.0 == TARGET_STATUS
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
