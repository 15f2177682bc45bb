//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Assistant: HTTP client for the answering backend
//! - Adapters: User-facing front ends (console)

pub mod adapters;
pub mod assistant;
pub mod config;
