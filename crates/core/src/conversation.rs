//! Conversation-related types.

use std::collections::HashMap;

use react_view_transcript::{Segment, SegmentKind, parse};
use serde::{Deserialize, Serialize};

/// Mapping from an action's text to the observation that answered it.
pub type ActionObservations = HashMap<String, String>;

/// Represents a conversation.
///
/// Messages only grow by appending. The question is a single slot that is
/// replaced whenever the user submits a new prompt.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub(crate) messages: Vec<Segment>,
    pub(crate) question: String,
}

impl Conversation {
    /// Creates an empty conversation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages in insertion order.
    #[inline]
    pub fn messages(&self) -> &[Segment] {
        &self.messages
    }

    /// Returns the current question.
    #[inline]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Replaces the current question.
    #[inline]
    pub fn set_question<S: Into<String>>(&mut self, question: S) {
        self.question = question.into();
    }

    /// Appends a single segment.
    #[inline]
    pub fn push(&mut self, segment: Segment) {
        self.messages.push(segment);
    }

    /// Parses a transcript and appends the resulting segments.
    pub fn append_transcript(&mut self, transcript: &str) {
        let segments = parse(transcript);
        trace!("appending {} segment(s)", segments.len());
        self.messages.extend(segments);
    }

    /// Appends the result of a tool call.
    #[inline]
    pub fn append_observation<S: Into<String>>(&mut self, text: S) {
        self.messages.push(Segment::observation(text));
    }

    /// Pairs every action with the observation that follows it.
    ///
    /// The mapping is recomputed from scratch on each call. When two
    /// actions occur with no observation in between, the earlier one is
    /// dropped from the result. Observations that arrive while no action
    /// is pending are ignored.
    pub fn extract_action_observation(&self) -> ActionObservations {
        let mut map = ActionObservations::new();
        let mut current: Option<&str> = None;
        for segment in &self.messages {
            match segment.kind {
                SegmentKind::Action => {
                    current = Some(segment.text.as_str());
                }
                SegmentKind::Observation => {
                    if let Some(key) = current {
                        map.insert(key.to_owned(), segment.text.clone());
                    }
                }
                _ => {}
            }
        }
        map
    }
}

impl Extend<Segment> for Conversation {
    #[inline]
    fn extend<T: IntoIterator<Item = Segment>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}
