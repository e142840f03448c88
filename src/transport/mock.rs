//! Scripted transport for unit tests

use super::{Method, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses in order and records every request it sees.
///
/// A request made after the queue is drained fails as a transport error.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, String>>>,
    requests: Mutex<Vec<(Method, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Err(message.into()));
        self
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|(_, url)| url).collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, method: Method, url: &str) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push((method, url.to_string()));

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(message.into()),
            None => Err(format!("no scripted response for {method} {url}").into()),
        }
    }
}
