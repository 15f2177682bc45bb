//! Input handling - Classifying console lines before dispatch

pub mod parser;

pub use parser::{Input, InputParser};
