use crate::application::services::conversation_store::SharedConversationStore;
use crate::domain::entities::Sender;
use crate::domain::traits::Assistant;

/// Shown when the backend answers but the answer field is missing or empty
pub const NO_ANSWER_FALLBACK: &str = "Sorry, I couldn't get an answer.";

/// Shown when the request fails outright
pub const REQUEST_FAILED_FALLBACK: &str = "There was an error. Please try again later.";

/// What happened to one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing was touched
    Rejected,
    /// The reply (or a fallback) was folded into the conversation
    Completed,
    /// The conversation was reset mid-flight; the reply was thrown away
    Discarded,
}

/// Service driving the submit cycle: commit the user message, query the
/// backend, fold the reply back into the conversation.
pub struct ChatService<A: Assistant> {
    assistant: A,
    store: SharedConversationStore,
}

impl<A: Assistant> ChatService<A> {
    pub fn new(assistant: A, store: SharedConversationStore) -> Self {
        Self { assistant, store }
    }

    pub fn store(&self) -> &SharedConversationStore {
        &self.store
    }

    /// Runs one full submission cycle.
    ///
    /// Whitespace-only input is rejected without touching the store.
    /// Otherwise the trimmed text is committed as a user message, the
    /// composing flag goes up, and exactly one backend call is made.
    /// Failures become a fixed fallback message instead of an error.
    /// If the conversation was reset while the call was in flight the
    /// reply is discarded. The composing flag comes back down on every
    /// path.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let query = input.trim();
        if query.is_empty() {
            return SubmitOutcome::Rejected;
        }

        // Commit the user message and remember which conversation the
        // reply will belong to
        let sent_epoch = {
            let mut store = self.store.lock().unwrap();
            store.append_message(query, Sender::User);
            store.set_composing(true);
            store.epoch()
        };

        tracing::debug!("Asking {}: {} chars", self.assistant.name(), query.len());
        let reply = self.assistant.ask(query).await;

        let text = match reply {
            Ok(reply) => match reply.answer.filter(|answer| !answer.is_empty()) {
                Some(answer) => answer,
                None => {
                    tracing::debug!("Backend reply had no usable answer, using fallback");
                    NO_ANSWER_FALLBACK.to_string()
                }
            },
            Err(err) => {
                tracing::error!("Assistant request failed: {}", err);
                REQUEST_FAILED_FALLBACK.to_string()
            }
        };

        let mut store = self.store.lock().unwrap();
        let outcome = if store.epoch() == sent_epoch {
            store.append_message(&text, Sender::Assistant);
            SubmitOutcome::Completed
        } else {
            tracing::debug!("Conversation was reset mid-flight, discarding reply");
            SubmitOutcome::Discarded
        };
        // Always comes down, even for a discarded reply
        store.set_composing(false);
        outcome
    }
}
