use super::{Message, Sender};

/// A single chat session: the ordered transcript plus the in-flight flag.
///
/// The transcript is never empty. Construction and every reset seed it
/// with one assistant greeting, and message ids restart at 1 on reset.
/// The epoch counter goes up by one per reset so callers can detect
/// that a reset happened while they were waiting on a response.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    greeting: String,
    next_id: u64,
    composing: bool,
    epoch: u64,
}

impl Conversation {
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let mut conversation = Self {
            messages: Vec::new(),
            greeting,
            next_id: 1,
            composing: false,
            epoch: 0,
        };
        conversation.seed();
        conversation
    }

    // Puts the greeting in as message 1 of a fresh transcript
    fn seed(&mut self) {
        self.next_id = 1;
        let greeting = Message::new(self.next_id, self.greeting.clone(), Sender::Assistant);
        self.next_id += 1;
        self.messages.push(greeting);
    }

    /// Appends a message with the next sequential id and returns it
    pub fn append(&mut self, text: impl Into<String>, sender: Sender) -> &Message {
        let message = Message::new(self.next_id, text, sender);
        self.next_id += 1;
        self.messages.push(message);
        self.messages.last().unwrap()
    }

    /// Drops the transcript and reseeds it with the greeting.
    /// Bumps the epoch; leaves the composing flag alone.
    pub fn reset(&mut self) -> &Message {
        self.epoch += 1;
        self.messages.clear();
        self.seed();
        self.messages.last().unwrap()
    }

    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
