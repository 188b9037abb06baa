//! Parsing of ReAct-style agent transcripts.
//!
//! An agent following the ReAct convention writes its reasoning as a plain
//! text blob, with each part introduced by a label such as `Thought:` or
//! `Action Input:`. This crate turns such a blob into an ordered list of
//! [`Segment`]s that a rendering layer can display one by one.
//!
//! Parsing is total: every input, including the empty string, yields at
//! least one segment.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod buffer;
mod parser;
mod segment;

pub use buffer::TranscriptBuffer;
pub use parser::{MARKERS, Marker, parse};
pub use segment::{Segment, SegmentKind};
