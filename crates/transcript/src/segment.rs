use std::fmt::{self, Display};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The label attached to a [`Segment`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SegmentKind {
    /// The agent's reasoning.
    Thought,
    /// The name of the tool the agent decides to call.
    Action,
    /// The input passed to the tool.
    #[serde(rename = "Action Input")]
    ActionInput,
    /// The agent's answer to the question.
    #[serde(rename = "Final Answer")]
    FinalAnswer,
    /// The result of a tool call.
    ///
    /// The parser never produces this kind. Observations are delivered
    /// through a separate channel and appended to the conversation
    /// directly.
    Observation,
}

impl SegmentKind {
    /// Returns the human readable label of this kind.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Thought => "Thought",
            SegmentKind::Action => "Action",
            SegmentKind::ActionInput => "Action Input",
            SegmentKind::FinalAnswer => "Final Answer",
            SegmentKind::Observation => "Observation",
        }
    }
}

impl Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labeled span of a transcript.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct Segment {
    /// The label of this segment.
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// The content of this segment.
    pub text: String,
}

impl Segment {
    /// Creates a segment with the given kind and text.
    #[inline]
    pub fn new<S: Into<String>>(kind: SegmentKind, text: S) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates an `Observation` segment.
    #[inline]
    pub fn observation<S: Into<String>>(text: S) -> Self {
        Self::new(SegmentKind::Observation, text)
    }
}
