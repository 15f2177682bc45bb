//! Assistant backend - HTTP client for the answering service

pub mod http;

pub use http::{HttpAssistant, DEFAULT_ENDPOINT};
