use crate::{Segment, SegmentKind};

/// A literal label that introduces a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// The kind of segment this marker introduces.
    pub kind: SegmentKind,
    /// The literal text of the marker, including the trailing colon.
    pub literal: &'static str,
}

/// The markers recognized by [`parse`].
///
/// The order of this table has no effect on the output, segments are
/// always emitted in the order their markers appear in the text.
pub const MARKERS: [Marker; 4] = [
    Marker {
        kind: SegmentKind::Thought,
        literal: "Thought:",
    },
    Marker {
        kind: SegmentKind::Action,
        literal: "Action:",
    },
    Marker {
        kind: SegmentKind::ActionInput,
        literal: "Action Input:",
    },
    Marker {
        kind: SegmentKind::FinalAnswer,
        literal: "Final Answer:",
    },
];

/// Splits a transcript into labeled segments.
///
/// Only the first occurrence of each marker is considered. Text before
/// the earliest marker is dropped, and later repetitions of a marker are
/// kept as part of the enclosing segment. Each segment's text is trimmed.
///
/// When no marker occurs at all, the whole input is returned untouched as
/// a single `Thought` segment.
pub fn parse(full_text: &str) -> Vec<Segment> {
    let mut found: Vec<(usize, &Marker)> = MARKERS
        .iter()
        .filter_map(|marker| {
            full_text.find(marker.literal).map(|index| (index, marker))
        })
        .collect();
    // Distinct markers never start at the same index.
    found.sort_unstable_by_key(|(index, _)| *index);
    trace!("found {} marker(s)", found.len());

    if found.is_empty() {
        return vec![Segment::new(SegmentKind::Thought, full_text)];
    }

    found
        .iter()
        .enumerate()
        .map(|(i, (index, marker))| {
            let start = index + marker.literal.len();
            let end = found
                .get(i + 1)
                .map(|(next, _)| *next)
                .unwrap_or(full_text.len());
            Segment::new(marker.kind, full_text[start..end].trim())
        })
        .collect()
}
