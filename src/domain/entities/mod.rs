//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod conversation;
pub mod message;

pub use command::{Command, CommandRegistry};
pub use conversation::Conversation;
pub use message::{Message, Sender};
