//! Input parser - Classifies raw console lines

/// What one line of console input turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing but whitespace
    Empty,
    /// A prefixed command with its arguments
    Command { name: String, args: Vec<String> },
    /// A chat message for the assistant, trimmed
    Text(String),
}

/// Parses raw console lines into structured input
pub struct InputParser {
    command_prefix: String,
}

impl InputParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn parse(&self, line: &str) -> Input {
        let line = line.trim();
        if line.is_empty() {
            return Input::Empty;
        }

        // Check if it's a command
        if let Some(cmd_text) = line.strip_prefix(&self.command_prefix) {
            return self.parse_command(cmd_text);
        }

        // Regular chat message
        Input::Text(line.to_string())
    }

    fn parse_command(&self, cmd_text: &str) -> Input {
        // Split command and arguments
        let mut parts = cmd_text.split_whitespace();
        let name = parts.next().unwrap_or("").to_string();
        let args = parts.map(|s| s.to_string()).collect();

        Input::Command { name, args }
    }
}
