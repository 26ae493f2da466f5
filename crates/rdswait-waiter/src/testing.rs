//! Scripted status source for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use rdswait_core::{InstanceRecord, ResourceId, SourceError, StatusSource};

/// One scripted answer from the source.
pub(crate) enum Step {
    /// A single match with the given status.
    Status(&'static str),
    /// The given records verbatim.
    Records(Vec<InstanceRecord>),
    /// A source failure.
    Fail(SourceError),
    /// Never answers.
    Hang,
}

impl Step {
    pub(crate) fn not_found() -> Self {
        Step::Records(Vec::new())
    }

    pub(crate) fn ambiguous() -> Self {
        Step::Records(vec![
            InstanceRecord::new("db-a", "available"),
            InstanceRecord::new("db-b", "available"),
        ])
    }

    pub(crate) fn missing_status() -> Self {
        Step::Records(vec![InstanceRecord::without_status("db")])
    }

    pub(crate) fn transient() -> Self {
        Step::Fail(SourceError::provider("connection reset by peer"))
    }
}

/// Answers from a script. Once the script runs out it repeats `then`, or
/// panics when there is nothing to repeat.
pub(crate) struct ScriptedSource {
    script: Mutex<VecDeque<Step>>,
    then: Option<&'static str>,
    calls: AtomicU32,
}

impl ScriptedSource {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            then: None,
            calls: AtomicU32::new(0),
        }
    }

    /// Keep reporting `status` after the script is exhausted.
    pub(crate) fn then_forever(mut self, status: &'static str) -> Self {
        self.then = Some(status);
        self
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn describe(
        &self,
        identifier: &ResourceId,
        max_records: u32,
    ) -> Result<Vec<InstanceRecord>, SourceError> {
        assert_eq!(max_records, rdswait_core::PAGE_SIZE);
        self.calls.fetch_add(1, Ordering::SeqCst);

        let step = self.script.lock().unwrap().pop_front();
        let step = match (step, self.then) {
            (Some(step), _) => step,
            (None, Some(status)) => Step::Status(status),
            (None, None) => panic!("unexpected probe #{}", self.calls()),
        };

        match step {
            Step::Status(status) => Ok(vec![InstanceRecord::new(identifier.as_str(), status)]),
            Step::Records(records) => Ok(records),
            Step::Fail(err) => Err(err),
            Step::Hang => std::future::pending().await,
        }
    }
}
