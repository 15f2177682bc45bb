use async_trait::async_trait;
use crate::application::errors::AssistantError;

/// Assistant trait - abstraction for the answering backend
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Provider label used in logs
    fn name(&self) -> &str;

    /// Send one query and wait for the reply
    async fn ask(&self, query: &str) -> Result<AssistantReply, AssistantError>;
}

/// Reply from the backend. A reply without an answer is a degraded
/// success, not an error: the backend responded but gave us nothing
/// usable to show.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub answer: Option<String>,
}
