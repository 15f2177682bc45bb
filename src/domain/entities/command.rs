use std::collections::HashMap;

/// A console command
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub handler: Option<CommandHandler>,
}

/// Command handler function type
pub type CommandHandler =
    Box<dyn Fn(&[String]) -> Result<String, crate::application::errors::CommandError> + Send + Sync>;

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            handler: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<String, crate::application::errors::CommandError>
            + Send
            + Sync
            + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }
}

/// Command registry for managing available commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.name.to_lowercase(), command);
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("Help").with_description("Show help"));

        assert!(registry.get("help").is_some());
        assert!(registry.get("HELP").is_some());
        assert!(registry.get("version").is_none());
        assert_eq!(registry.len(), 1);
    }
}
