//! Writing a conversation out.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use react_view_core::{ActionObservations, Conversation};
use react_view_transcript::{Segment, SegmentKind};
use schemars::schema_for;

use crate::config::{OutputFormat, ViewConfig};

const BAR_CHAR: &str = "▎";

/// Writes the conversation in the configured format.
pub fn render<W: Write>(
    out: &mut W,
    conversation: &Conversation,
    config: &ViewConfig,
) -> io::Result<()> {
    match config.format {
        OutputFormat::Pretty => render_pretty(out, conversation, config.color),
        OutputFormat::Json => render_json(out, conversation),
        OutputFormat::Schema => render_schema(out),
    }
}

/// Writes one block per segment, then the action/observation pairs.
pub fn render_pretty<W: Write>(
    out: &mut W,
    conversation: &Conversation,
    color: bool,
) -> io::Result<()> {
    if !conversation.question().is_empty() {
        let question = conversation.question();
        if color {
            writeln!(out, "> {}", question.bright_white().bold())?;
        } else {
            writeln!(out, "> {question}")?;
        }
        writeln!(out)?;
    }

    for segment in conversation.messages() {
        write_segment(out, segment, color)?;
    }

    let pairs = conversation.extract_action_observation();
    if !pairs.is_empty() {
        write_pairs(out, &pairs, color)?;
    }
    Ok(())
}

fn write_segment<W: Write>(
    out: &mut W,
    segment: &Segment,
    color: bool,
) -> io::Result<()> {
    let label = segment.kind.label();
    if color {
        let bar = paint(segment.kind, BAR_CHAR);
        writeln!(out, "{bar}{}", paint(segment.kind, label).bold())?;
        for line in segment.text.lines() {
            writeln!(out, "{bar}  {line}")?;
        }
    } else {
        writeln!(out, "{BAR_CHAR}{label}")?;
        for line in segment.text.lines() {
            writeln!(out, "{BAR_CHAR}  {line}")?;
        }
    }
    writeln!(out)
}

fn write_pairs<W: Write>(
    out: &mut W,
    pairs: &ActionObservations,
    color: bool,
) -> io::Result<()> {
    let mut pairs: Vec<_> = pairs.iter().collect();
    pairs.sort();

    if color {
        writeln!(out, "{}", "Tool results".bold())?;
    } else {
        writeln!(out, "Tool results")?;
    }
    for (action, observation) in pairs {
        // Keep each pair on one line.
        let observation = observation.replace('\n', " ");
        if color {
            writeln!(
                out,
                "  {} → {}",
                action.bright_yellow(),
                observation.bright_cyan()
            )?;
        } else {
            writeln!(out, "  {action} → {observation}")?;
        }
    }
    Ok(())
}

fn paint(kind: SegmentKind, s: &str) -> String {
    match kind {
        SegmentKind::Thought => s.bright_black().to_string(),
        SegmentKind::Action => s.bright_yellow().to_string(),
        SegmentKind::ActionInput => s.yellow().to_string(),
        SegmentKind::FinalAnswer => s.bright_green().to_string(),
        SegmentKind::Observation => s.bright_cyan().to_string(),
    }
}

/// Writes the conversation snapshot as pretty-printed JSON.
pub fn render_json<W: Write>(
    out: &mut W,
    conversation: &Conversation,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, conversation)?;
    writeln!(out)
}

/// Writes the JSON schema of a segment record.
pub fn render_schema<W: Write>(out: &mut W) -> io::Result<()> {
    let schema = schema_for!(Segment);
    serde_json::to_writer_pretty(&mut *out, &schema)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.set_question("how many?");
        conversation.append_transcript("Thought: count\nAction: search");
        conversation.append_observation("line one\nline two");
        conversation.append_transcript("Final Answer: two");
        conversation
    }

    #[test]
    fn test_plain_pretty_output() {
        let mut out = Vec::new();
        render_pretty(&mut out, &sample(), false).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "\
> how many?

▎Thought
▎  count

▎Action
▎  search

▎Observation
▎  line one
▎  line two

▎Final Answer
▎  two

Tool results
  search → line one line two
"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        render_json(&mut out, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["question"], "how many?");
        assert_eq!(value["messages"][2]["type"], "Observation");
    }

    #[test]
    fn test_schema_output() {
        let mut out = Vec::new();
        render_schema(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["properties"]["type"].is_object());
    }
}
