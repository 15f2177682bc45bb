//! Domain traits - Abstractions for infrastructure implementations

pub mod assistant;

pub use assistant::{Assistant, AssistantReply};
