//! Scripted `TextGenerator` for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ChatMessage, LlmError, TextGenerator};

/// Replays queued replies in order and records every conversation it was sent.
/// Once the script runs out, further calls fail with `LlmError::EmptyContent`.
pub struct MockGenerator {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockGenerator {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().clone()
    }

    /// Text of the last message of every recorded call.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| call.last().map(|m| m.content.clone()))
            .collect()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.calls.lock().push(messages.to_vec());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}
