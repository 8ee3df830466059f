//! Shared test utilities for people-loader integration tests.
//!
//! Provides MockTransport (BulkTransport) that answers with scripted statuses and records
//! every body it receives.

use std::collections::VecDeque;

use async_trait::async_trait;
use bulk_client::{BulkError, BulkResponse, BulkTransport};
use tokio::sync::Mutex;

/// Scripted reply for one request.
#[allow(dead_code)]
pub enum Reply {
    Status(u16, &'static str),
    /// Request that never gets a response.
    Unreachable,
}

/// Transport that replays [`Reply`]s in order; once the script runs out it answers 200.
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    bodies: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            bodies: Mutex::new(Vec::new()),
        }
    }

    pub fn always_ok() -> Self {
        Self::new(Vec::new())
    }

    pub async fn bodies(&self) -> Vec<String> {
        self.bodies.lock().await.clone()
    }
}

#[async_trait]
impl BulkTransport for MockTransport {
    async fn send_bulk(&self, body: String) -> Result<BulkResponse, BulkError> {
        self.bodies.lock().await.push(body);
        match self.replies.lock().await.pop_front() {
            None => Ok(BulkResponse {
                status: 200,
                body: r#"{"errors":false}"#.to_string(),
            }),
            Some(Reply::Status(status, body)) => Ok(BulkResponse {
                status,
                body: body.to_string(),
            }),
            Some(Reply::Unreachable) => {
                Err(BulkError::Endpoint("connection refused".to_string()))
            }
        }
    }
}
