//! Application layer errors

use thiserror::Error;

/// Errors from the assistant backend exchange
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
}
