//! Test utilities for generation
//!
//! Provides a scripted in-memory [`GenerationService`] and helpers for
//! building explanation replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::GenerationError;
use crate::service::{GenerationService, ServiceRequest};

/// Service that replays queued replies in order and records every request
///
/// Once the queue is empty every call fails with
/// [`GenerationError::EmptyResponse`].
#[derive(Debug, Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    requests: Mutex<Vec<ServiceRequest>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failure
    pub fn with_error(self, err: GenerationError) -> Self {
        self.push(Err(err));
        self
    }

    pub fn push(&self, reply: Result<String, GenerationError>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl GenerationService for ScriptedService {
    async fn generate(&self, request: ServiceRequest) -> Result<String, GenerationError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// A well-formed six-step reply in the interactive explanation format
pub fn six_hats_reply() -> String {
    let hats = [
        ("White Hat: Facts", "white_hat"),
        ("Red Hat: Feelings", "red_hat"),
        ("Black Hat: Risks", "black_hat"),
        ("Yellow Hat: Benefits", "yellow_hat"),
        ("Green Hat: Ideas", "green_hat"),
        ("Blue Hat: Process", "blue_hat"),
    ];
    let steps: Vec<serde_json::Value> = hats
        .iter()
        .map(|(title, icon)| {
            serde_json::json!({
                "title": title,
                "icon": icon,
                "content": format!("## {}\n* think about it", title),
            })
        })
        .collect();
    serde_json::json!({ "interactive_steps": steps }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_service_replays_in_order() {
        let service = ScriptedService::new()
            .with_reply("first")
            .with_error(GenerationError::Timeout { secs: 1 });

        let first = service.generate(ServiceRequest::text("a")).await;
        assert_eq!(first.unwrap(), "first");

        let second = service.generate(ServiceRequest::json("b")).await;
        assert!(matches!(second, Err(GenerationError::Timeout { .. })));

        let third = service.generate(ServiceRequest::text("c")).await;
        assert!(matches!(third, Err(GenerationError::EmptyResponse)));

        assert_eq!(service.request_count(), 3);
        assert!(service.requests()[1].json);
    }
}
