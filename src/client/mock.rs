//! Stub transport for unit tests
//!
//! Records every request it receives and answers from a queue of canned
//! responses. When the queue is empty it answers `200 {}`.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

enum Canned {
    Response(HttpResponse),
    Failure(String),
}

/// Transport that never touches the network.
#[derive(Default)]
pub struct MockTransport {
    queue: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Canned::Response(HttpResponse {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.as_bytes().to_vec(),
            }));
    }

    /// Queue a transport failure.
    pub fn fail(&self, message: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Canned::Failure(message.to_string()));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);

        match self.queue.lock().unwrap().pop_front() {
            Some(Canned::Response(response)) => Ok(response),
            Some(Canned::Failure(message)) => Err(ApiError::Network(message)),
            None => Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: b"{}".to_vec(),
            }),
        }
    }
}
