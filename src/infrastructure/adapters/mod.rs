//! Adapters - User-facing front ends

pub mod console;

pub use console::ConsoleChat;
