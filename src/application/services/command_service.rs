use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandRegistry};

/// Service for managing and executing console commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self) {
        let prefix = self.prefix.clone();
        let help_text = format!(
            "Available commands:\n\
             {p}new - Start a new chat\n\
             {p}help - Show this message\n\
             {p}version - Show version\n\
             {p}quit - Leave the chat",
            p = prefix
        );

        // Help command
        self.register(
            Command::new("help")
                .with_description("Show help message")
                .with_handler(move |_| Ok(help_text.clone())),
        );

        // Version command
        self.register(
            Command::new("version")
                .with_description("Show client version")
                .with_handler(|_| Ok(format!("counsel-chat v{}", env!("CARGO_PKG_VERSION")))),
        );
    }

    pub fn handle(&self, name: &str, args: &[String]) -> Result<String, CommandError> {
        let cmd = self
            .registry
            .get(name)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        // Execute handler
        if let Some(handler) = &cmd.handler {
            handler(args)
        } else {
            Err(CommandError::ExecutionFailed(format!(
                "{} has no handler",
                cmd.name
            )))
        }
    }

    pub fn command_count(&self) -> usize {
        self.registry.len()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_command() {
        let mut service = CommandService::new("/");
        service.register_defaults();

        let output = service.handle("version", &[]).unwrap();
        assert!(output.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_help_lists_new_chat() {
        let mut service = CommandService::new("/");
        service.register_defaults();

        let output = service.handle("help", &[]).unwrap();
        assert!(output.contains("/new"));
        assert!(output.contains("/quit"));
    }

    #[test]
    fn test_unknown_command() {
        let mut service = CommandService::new("/");
        service.register_defaults();

        let err = service.handle("nope", &[]).unwrap_err();
        assert!(matches!(err, CommandError::NotFound(name) if name == "nope"));
    }

    #[test]
    fn test_help_respects_custom_prefix() {
        let mut service = CommandService::new("!");
        service.register_defaults();

        let output = service.handle("help", &[]).unwrap();
        assert!(output.contains("!new"));
        assert_eq!(service.prefix(), "!");
    }
}
