//! A single-writer store for hosts with concurrent callers.
//!
//! A UI event handler and a background fetch completion may both want to
//! append to the same conversation. The store owns the [`Conversation`] in
//! a dedicated task and applies every command in the order it arrives, so
//! callers never observe a half-applied update.

mod error;
mod worker;

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::Instrument;

use crate::conversation::{ActionObservations, Conversation};
pub use error::StoreClosedError;
use worker::{Command, run_store};

/// Handle to a conversation owned by a background task.
///
/// Handles are cheap to clone. The task stops once every handle has been
/// dropped or [`ConversationStore::shutdown`] is called.
#[derive(Clone)]
pub struct ConversationStore {
    cmd_tx: mpsc::UnboundedSender<Command>,
    kill_tx: Arc<watch::Sender<bool>>,
}

impl ConversationStore {
    /// Spawns a store task owning the given conversation.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn(conversation: Conversation) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (kill_tx, kill_rx) = watch::channel(false);
        tokio::spawn(
            run_store(conversation, cmd_rx, kill_rx)
                .instrument(trace_span!("conversation store")),
        );
        Self {
            cmd_tx,
            kill_tx: Arc::new(kill_tx),
        }
    }

    /// Parses a transcript and appends its segments.
    #[inline]
    pub fn append_transcript<S: Into<String>>(
        &self,
        transcript: S,
    ) -> Result<(), StoreClosedError> {
        self.send(Command::AppendTranscript(transcript.into()))
    }

    /// Appends the result of a tool call.
    #[inline]
    pub fn append_observation<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), StoreClosedError> {
        self.send(Command::AppendObservation(text.into()))
    }

    /// Replaces the current question.
    #[inline]
    pub fn set_question<S: Into<String>>(
        &self,
        question: S,
    ) -> Result<(), StoreClosedError> {
        self.send(Command::SetQuestion(question.into()))
    }

    /// Clears the messages and the question.
    #[inline]
    pub fn reset(&self) -> Result<(), StoreClosedError> {
        self.send(Command::Reset)
    }

    /// Returns a copy of the conversation after all previously sent
    /// commands have been applied.
    pub async fn snapshot(&self) -> Result<Conversation, StoreClosedError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx))?;
        rx.await.map_err(|_| StoreClosedError)
    }

    /// Returns the action to observation mapping of the conversation.
    ///
    /// See [`Conversation::extract_action_observation`].
    pub async fn action_observations(
        &self,
    ) -> Result<ActionObservations, StoreClosedError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::ActionObservations(tx))?;
        rx.await.map_err(|_| StoreClosedError)
    }

    /// Asks the store task to stop.
    ///
    /// The task is not guaranteed to stop immediately, but it will not
    /// handle further commands.
    #[inline]
    pub fn shutdown(&self) {
        self.kill_tx.send(true).ok();
    }

    #[inline]
    fn send(&self, cmd: Command) -> Result<(), StoreClosedError> {
        self.cmd_tx.send(cmd).map_err(|_| StoreClosedError)
    }
}
