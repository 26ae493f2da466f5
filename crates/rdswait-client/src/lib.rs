//! HTTP status source for rdswait.
//!
//! Talks to a DescribeDBInstances-style JSON endpoint and reports the
//! matching instances as [`rdswait_core::InstanceRecord`]s.

mod error;
mod http;
mod wire;

pub use error::ClientError;
pub use http::{HttpConfig, HttpStatusSource};
