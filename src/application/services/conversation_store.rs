//! Conversation state store - the single source of truth for what the
//! UI renders. Mutations go through here so every change reaches the
//! subscribed listeners.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::entities::{Conversation, Message, Sender};

/// Change notification pushed to subscribers
#[derive(Debug, Clone)]
pub enum ConversationEvent {
    MessageAppended(Message),
    /// Carries the fresh greeting the transcript was reseeded with
    ConversationReset(Message),
    ComposingChanged(bool),
}

/// Handle shared between the chat service and the console adapter.
/// Lock it for short synchronous sections only, never across an await.
pub type SharedConversationStore = Arc<Mutex<ConversationStore>>;

pub struct ConversationStore {
    conversation: Conversation,
    listeners: Vec<UnboundedSender<ConversationEvent>>,
}

impl ConversationStore {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::new(greeting),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for change events
    pub fn subscribe(&mut self) -> UnboundedReceiver<ConversationEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    /// Appends a message with the next id and returns the updated
    /// transcript. User messages must carry text; an empty user
    /// message is a no-op.
    pub fn append_message(&mut self, text: &str, sender: Sender) -> &[Message] {
        if sender == Sender::User && text.is_empty() {
            return self.conversation.messages();
        }
        let appended = self.conversation.append(text, sender).clone();
        tracing::debug!("Appended {} message {}", appended.sender.as_str(), appended.id);
        self.emit(ConversationEvent::MessageAppended(appended));
        self.conversation.messages()
    }

    /// Replaces the transcript with a single fresh greeting and bumps
    /// the epoch. The composing flag is left as it is.
    pub fn reset_conversation(&mut self) {
        let greeting = self.conversation.reset().clone();
        self.emit(ConversationEvent::ConversationReset(greeting));
    }

    /// Flips the in-flight indicator. Listeners only hear actual
    /// transitions, not repeated writes of the same value.
    pub fn set_composing(&mut self, composing: bool) {
        if self.conversation.is_composing() == composing {
            return;
        }
        self.conversation.set_composing(composing);
        self.emit(ConversationEvent::ComposingChanged(composing));
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn is_composing(&self) -> bool {
        self.conversation.is_composing()
    }

    pub fn epoch(&self) -> u64 {
        self.conversation.epoch()
    }

    // Listeners whose receiver is gone are dropped on the next emit
    fn emit(&mut self, event: ConversationEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
