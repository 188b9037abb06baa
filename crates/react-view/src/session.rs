use react_view_core::{
    ActionObservations, Conversation, ConversationStore, StoreClosedError,
};
use react_view_transcript::{Segment, TranscriptBuffer};

/// A session builder.
///
/// See [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    conversation: Conversation,
}

impl SessionBuilder {
    /// Creates a builder for an empty session.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a previously taken snapshot.
    #[inline]
    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.conversation = conversation;
        self
    }

    /// Sets the initial question.
    #[inline]
    pub fn with_question<S: Into<String>>(mut self, question: S) -> Self {
        self.conversation.set_question(question);
        self
    }

    /// Builds a new session.
    ///
    /// Must be called within a tokio runtime.
    pub fn build(self) -> Session {
        Session {
            store: ConversationStore::spawn(self.conversation),
            turn: TranscriptBuffer::new(),
        }
    }
}

/// A chat session, like a window that displays the agent's reasoning and
/// has an input box for the question.
///
/// The session is the explicit context object a host passes to whatever
/// layer needs the conversation. It owns the store and the model turn
/// that is still being streamed.
pub struct Session {
    store: ConversationStore,
    turn: TranscriptBuffer,
}

impl Session {
    /// Returns the underlying store, for sharing with other writers.
    #[inline]
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Submits a new question.
    #[inline]
    pub fn ask<S: Into<String>>(
        &self,
        question: S,
    ) -> Result<(), StoreClosedError> {
        self.store.set_question(question)
    }

    /// Feeds a streamed delta of model output into the open turn.
    #[inline]
    pub fn push_delta(&mut self, delta: &str) {
        self.turn.push_delta(delta);
    }

    /// Parses the open turn without committing it.
    #[inline]
    pub fn live_segments(&self) -> Vec<Segment> {
        self.turn.segments()
    }

    /// Commits the open turn to the conversation.
    ///
    /// Does nothing if no delta has been received since the last commit.
    pub fn finish_turn(&mut self) -> Result<(), StoreClosedError> {
        if self.turn.is_empty() {
            return Ok(());
        }
        let text = self.turn.take();
        trace!("committing model turn of {} bytes", text.len());
        self.store.append_transcript(text)
    }

    /// Commits the open turn, then appends the result of a tool call.
    pub fn observe<S: Into<String>>(
        &mut self,
        text: S,
    ) -> Result<(), StoreClosedError> {
        self.finish_turn()?;
        self.store.append_observation(text)
    }

    /// Returns a copy of the committed conversation.
    #[inline]
    pub async fn snapshot(&self) -> Result<Conversation, StoreClosedError> {
        self.store.snapshot().await
    }

    /// Returns the action to observation mapping of the committed
    /// conversation.
    #[inline]
    pub async fn action_observations(
        &self,
    ) -> Result<ActionObservations, StoreClosedError> {
        self.store.action_observations().await
    }

    /// Starts over, discarding the open turn and the conversation.
    pub fn reset(&mut self) -> Result<(), StoreClosedError> {
        self.turn.take();
        self.store.reset()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.turn.is_empty() {
            debug!("session dropped with an uncommitted model turn");
        }
    }
}
