//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Message, Conversation, Command)
//! - Traits: Abstractions for infrastructure (Assistant)

pub mod entities;
pub mod traits;
