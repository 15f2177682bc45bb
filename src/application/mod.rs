//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Conversation state, chat cycle, command dispatch
//! - Errors: Application-specific errors
//! - Messaging: Console input classification

pub mod errors;
pub mod services;
pub mod messaging;
