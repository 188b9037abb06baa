//! Conversation state for a ReAct chat session.
//!
//! [`conversation::Conversation`] holds the parsed segments and the current
//! question, and [`store::ConversationStore`] wraps it in a single-writer
//! task for hosts with more than one caller.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod conversation;
pub mod store;

pub use conversation::{ActionObservations, Conversation};
pub use store::{ConversationStore, StoreClosedError};
