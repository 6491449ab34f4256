//! Shared test double: a transport that replays queued responses and records
//! the routes it was asked for.

// Each integration-test binary compiles this module and uses its own subset
// of the helpers.
#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::Mutex,
};

use async_trait::async_trait;
use storekit_billing::{BillingError, Result, Transport, TransportResponse};

/// Transport double with a response queue and a route history.
///
/// An exhausted queue behaves like a transport-level failure, which is also
/// how timeout behavior is exercised without a network.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    routes: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response for the next request.
    pub fn queue_json(&self, status: u16, body: &serde_json::Value) {
        self.queue(TransportResponse {
            status,
            headers: vec![("content-type".to_owned(), "application/json".to_owned())],
            body: serde_json::to_vec(body).expect("fixture serializes"),
        });
    }

    /// Queues an arbitrary response for the next request.
    pub fn queue(&self, response: TransportResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Routes requested so far, in order.
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, route: &str) -> Result<TransportResponse> {
        self.routes.lock().unwrap().push(route.to_owned());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| BillingError::Transport("connection timed out".to_owned()))
    }
}
