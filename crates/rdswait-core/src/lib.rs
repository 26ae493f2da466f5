//! rdswait Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! The status source seam lives here so that the waiter and the
//! HTTP client can both depend on it without depending on each other.

pub mod error;
pub mod ids;
pub mod instance;
pub mod source;
pub mod status;

// Re-export commonly used types
pub use error::{ProbeError, SourceError};
pub use ids::{ResourceId, RunId};
pub use instance::InstanceRecord;
pub use source::{StatusSource, PAGE_SIZE};
pub use status::{InstanceStatus, TARGET_STATUS};
