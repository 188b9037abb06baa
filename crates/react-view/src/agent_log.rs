//! Splitting of agent execution logs.
//!
//! A ReAct agent stops generation right before `Observation:`, and the
//! executor writes the tool result after it. A full execution log is
//! therefore a sequence of model turns interleaved with observations.

use std::mem;

use react_view_transcript::MARKERS;

const OBSERVATION_MARKER: &str = "Observation:";

/// A part of an agent execution log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Text generated by the model, to be parsed into segments.
    Model(String),
    /// The trimmed result of a tool call.
    Observation(String),
}

impl Turn {
    #[inline]
    fn push_str(&mut self, s: &str) {
        match self {
            Turn::Model(text) | Turn::Observation(text) => text.push_str(s),
        }
    }
}

/// Splits a log into model turns and observations.
///
/// A line starting with `Observation:` opens an observation, which runs
/// until the next line starting with a transcript marker or another
/// observation. Model turns with no visible content are skipped.
pub fn split_log(log: &str) -> Vec<Turn> {
    let mut turns = vec![];
    let mut current = Turn::Model(String::new());

    for line in log.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(OBSERVATION_MARKER) {
            let next = Turn::Observation(rest.to_owned());
            flush(&mut turns, mem::replace(&mut current, next));
            continue;
        }

        let starts_with_marker = MARKERS
            .iter()
            .any(|marker| trimmed.starts_with(marker.literal));
        if starts_with_marker && matches!(current, Turn::Observation(_)) {
            let next = Turn::Model(String::new());
            flush(&mut turns, mem::replace(&mut current, next));
        }
        current.push_str(line);
    }
    flush(&mut turns, current);

    trace!("split log into {} turn(s)", turns.len());
    turns
}

fn flush(turns: &mut Vec<Turn>, turn: Turn) {
    match turn {
        Turn::Model(text) => {
            if !text.trim().is_empty() {
                turns.push(Turn::Model(text));
            }
        }
        Turn::Observation(text) => {
            turns.push(Turn::Observation(text.trim().to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_log() {
        let log = "\
Thought: I need the agenda.
Action: parse_agenda
Action Input: meeting.txt
Observation: 1. budget
2. hiring
Thought: I know the answer.
Final Answer: budget and hiring
";
        assert_eq!(
            split_log(log),
            vec![
                Turn::Model(
                    "Thought: I need the agenda.\nAction: parse_agenda\nAction Input: meeting.txt\n"
                        .to_owned()
                ),
                Turn::Observation("1. budget\n2. hiring".to_owned()),
                Turn::Model(
                    "Thought: I know the answer.\nFinal Answer: budget and hiring\n"
                        .to_owned()
                ),
            ]
        );
    }

    #[test]
    fn test_log_without_observations() {
        let log = "Thought: nothing to do\nFinal Answer: ok";
        assert_eq!(split_log(log), vec![Turn::Model(log.to_owned())]);
    }

    #[test]
    fn test_blank_model_turns_are_skipped() {
        let log = "\n  \nObservation: a\nObservation:   b  \n";
        assert_eq!(
            split_log(log),
            vec![
                Turn::Observation("a".to_owned()),
                Turn::Observation("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_empty_log() {
        assert!(split_log("").is_empty());
    }
}
