use std::future::Future;

use crate::domain::{
    chat::value_objects::{ChatCompletionRequest, ChatInput},
    common::entities::app_errors::CoreError,
};

/// Client trait for the chat-completion provider.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn chat(
        &self,
        request: ChatCompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the dietician assistant. Provider failures come back as
/// user-facing reply text, never as errors.
pub trait ChatService: Send + Sync {
    fn reply(&self, input: ChatInput) -> impl Future<Output = Result<String, CoreError>> + Send;
}
