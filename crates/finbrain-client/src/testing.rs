//! Recording transport for network-free tests.

use crate::request::{HttpResponse, PreparedRequest};
use crate::transport::{AsyncTransport, Transport};
use async_trait::async_trait;
use finbrain_types::{FinBrainError, Result};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Scripted {
    Response(HttpResponse),
    Failure(String),
}

#[derive(Default)]
struct Inner {
    script: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<PreparedRequest>>,
}

/// Replays scripted responses in order and records every request.
///
/// Clones share the script and the record, so a test can keep one handle
/// while the client owns another.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("sent", &self.requests().len())
            .finish()
    }
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub(crate) fn respond(self, status: u16, body: Value) -> Self {
        self.respond_text(status, body.to_string())
    }

    /// Queue a raw text response.
    pub(crate) fn respond_text(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Scripted::Response(HttpResponse::new(status, body)))
    }

    /// Queue a transport failure.
    pub(crate) fn fail(self, message: &str) -> Self {
        self.push(Scripted::Failure(message.to_string()))
    }

    /// Every request sent so far.
    pub(crate) fn requests(&self) -> Vec<PreparedRequest> {
        self.inner.sent.lock().unwrap().clone()
    }

    fn push(self, item: Scripted) -> Self {
        self.inner.script.lock().unwrap().push_back(item);
        self
    }

    fn next(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        self.inner.sent.lock().unwrap().push(request.clone());
        match self.inner.script.lock().unwrap().pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(FinBrainError::transport(message)),
            None => Err(FinBrainError::transport(format!(
                "no scripted response for {}",
                request.path()
            ))),
        }
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        self.next(request)
    }
}

#[async_trait]
impl AsyncTransport for MockTransport {
    async fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        self.next(request)
    }
}
