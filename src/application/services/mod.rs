//! Application services - Business logic orchestration

pub mod chat_service;
pub mod command_service;
pub mod conversation_store;

pub use chat_service::{ChatService, SubmitOutcome};
pub use command_service::CommandService;
pub use conversation_store::{ConversationEvent, ConversationStore, SharedConversationStore};
