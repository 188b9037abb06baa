use std::mem;

use crate::{Segment, parse};

/// Accumulates a transcript that arrives as a stream of text deltas.
///
/// Model output is usually streamed, and a marker may be split across two
/// deltas. The buffer therefore keeps the raw text and re-parses the whole
/// accumulation on demand rather than parsing each delta on its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscriptBuffer {
    buf: String,
}

impl TranscriptBuffer {
    /// Creates an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a delta to the buffer.
    #[inline]
    pub fn push_delta(&mut self, delta: &str) {
        self.buf.push_str(delta);
    }

    /// Returns the accumulated raw text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.buf
    }

    /// Returns `true` if nothing has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Parses the accumulated text.
    #[inline]
    pub fn segments(&self) -> Vec<Segment> {
        parse(&self.buf)
    }

    /// Takes the accumulated text out, leaving the buffer empty.
    #[inline]
    pub fn take(&mut self) -> String {
        mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentKind;

    #[test]
    fn test_marker_split_across_deltas() {
        let mut buffer = TranscriptBuffer::new();
        for delta in ["Thou", "ght: look", " it up\nAct", "ion: search"] {
            buffer.push_delta(delta);
        }
        assert_eq!(
            buffer.segments(),
            vec![
                Segment::new(SegmentKind::Thought, "look it up"),
                Segment::new(SegmentKind::Action, "search"),
            ]
        );
    }

    #[test]
    fn test_partial_marker_is_a_thought() {
        let mut buffer = TranscriptBuffer::new();
        buffer.push_delta("Fin");
        assert_eq!(
            buffer.segments(),
            vec![Segment::new(SegmentKind::Thought, "Fin")]
        );
        buffer.push_delta("al Answer: yes");
        assert_eq!(
            buffer.segments(),
            vec![Segment::new(SegmentKind::FinalAnswer, "yes")]
        );
    }

    #[test]
    fn test_take_resets() {
        let mut buffer = TranscriptBuffer::new();
        assert!(buffer.is_empty());
        buffer.push_delta("Thought: a");
        assert_eq!(buffer.take(), "Thought: a");
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
    }
}
