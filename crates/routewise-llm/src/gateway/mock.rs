//! Mock gateway for testing
//!
//! Returns queued outcomes in order, then a canned reply naming the model.

use super::ResponseGateway;
use crate::catalog::ModelDescriptor;
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A gateway that answers from a queue
#[derive(Clone, Default)]
pub struct MockGateway {
    outcomes: Arc<Mutex<VecDeque<Result<String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockGateway {
    /// Create a mock gateway
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait this long before answering (cancellation still applies)
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful reply
    pub fn push_response(&self, content: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(content.into()));
    }

    /// Queue a failure
    pub fn push_error(&self, error: Error) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(error));
    }

    /// Model ids requested so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait::async_trait]
impl ResponseGateway for MockGateway {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        model: &ModelDescriptor,
        _prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(model.id.clone());

        if let Some(delay) = self.delay {
            tokio::select! {
                () = cancel.cancelled() => return Err(Error::Cancelled),
                () = tokio::time::sleep(delay) => {}
            }
        } else if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let next = self
            .outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        next.unwrap_or_else(|| Ok(format!("mock response from {}", model.id)))
    }
}
