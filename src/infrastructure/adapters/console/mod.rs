//! Console adapter - interactive chat session over stdin/stdout

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::application::messaging::{Input, InputParser};
use crate::application::services::{
    ChatService, CommandService, ConversationEvent, SharedConversationStore,
};
use crate::domain::entities::{Message, Sender};
use crate::domain::traits::Assistant;

/// Interactive console session. Renders the conversation from store
/// change events; the transcript goes to stdout, logs stay on stderr.
pub struct ConsoleChat<A: Assistant> {
    service: Arc<ChatService<A>>,
    store: SharedConversationStore,
    commands: CommandService,
    parser: InputParser,
    bot_name: String,
}

impl<A: Assistant + 'static> ConsoleChat<A> {
    pub fn new(
        service: Arc<ChatService<A>>,
        commands: CommandService,
        bot_name: impl Into<String>,
    ) -> Self {
        let store = service.store().clone();
        let parser = InputParser::new(commands.prefix());
        Self {
            service,
            store,
            commands,
            parser,
            bot_name: bot_name.into(),
        }
    }

    /// Runs the session until quit or end of input
    pub async fn run(self) {
        // Subscribe before printing the snapshot so no change is missed
        let mut events = self.store.lock().unwrap().subscribe();

        println!(
            "Chatting with {}. Type {}help for commands.",
            self.bot_name,
            self.commands.prefix()
        );
        {
            let store = self.store.lock().unwrap();
            for message in store.messages() {
                self.render_message(message);
            }
        }

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            self.prompt();
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            };

            match self.parser.parse(&line) {
                Input::Empty => continue,
                Input::Command { name, args } => {
                    if !self.handle_command(&name, &args) {
                        break;
                    }
                    self.drain_events(&mut events);
                }
                Input::Text(text) => {
                    self.submit(text, &mut events).await;
                }
            }
        }

        println!("Goodbye.");
    }

    // Returns false when the session should end
    fn handle_command(&self, name: &str, args: &[String]) -> bool {
        match name {
            // New Chat: wipe the transcript, keep the session
            "new" => {
                self.store.lock().unwrap().reset_conversation();
            }
            "quit" | "exit" => return false,
            _ => match self.commands.handle(name, args) {
                Ok(response) => println!("[{}] {}", self.bot_name, response),
                Err(e) => println!("Error: {}", e),
            },
        }
        true
    }

    /// Submits one query, rendering store events while it is in flight
    async fn submit(&self, text: String, events: &mut UnboundedReceiver<ConversationEvent>) {
        let service = self.service.clone();
        let mut in_flight = tokio::spawn(async move { service.submit(&text).await });

        loop {
            tokio::select! {
                Some(event) = events.recv() => {
                    self.render_event(event);
                }
                result = &mut in_flight => {
                    if let Err(e) = result {
                        tracing::error!("Submission task failed: {}", e);
                    }
                    break;
                }
            }
        }
        self.drain_events(events);
    }

    fn drain_events(&self, events: &mut UnboundedReceiver<ConversationEvent>) {
        while let Ok(event) = events.try_recv() {
            self.render_event(event);
        }
    }

    fn render_event(&self, event: ConversationEvent) {
        match event {
            ConversationEvent::MessageAppended(message) => {
                // The user's own line is already on screen
                if message.is_from(Sender::Assistant) {
                    self.render_message(&message);
                }
            }
            ConversationEvent::ConversationReset(greeting) => {
                println!("--- new chat ---");
                self.render_message(&greeting);
            }
            ConversationEvent::ComposingChanged(true) => {
                println!("[{}] typing...", self.bot_name);
            }
            ConversationEvent::ComposingChanged(false) => {}
        }
    }

    fn render_message(&self, message: &Message) {
        match message.sender {
            Sender::Assistant => println!("[{}] {}", self.bot_name, message.text),
            Sender::User => println!("[you] {}", message.text),
        }
    }

    fn prompt(&self) {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}
