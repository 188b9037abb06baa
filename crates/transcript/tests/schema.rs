use react_view_transcript::{Segment, SegmentKind, parse};
use schemars::schema_for;

#[test]
fn test_record_schema_names_fields() {
    let schema = schema_for!(Segment).to_value();
    let properties = schema
        .get("properties")
        .and_then(|p| p.as_object())
        .unwrap();
    assert!(properties.contains_key("type"));
    assert!(properties.contains_key("text"));
}

#[test]
fn test_parsed_output_is_consumable_as_json() {
    let segments = parse("Thought: hmm\nFinal Answer: ok");
    let json = serde_json::to_string(&segments).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"Thought","text":"hmm"},{"type":"Final Answer","text":"ok"}]"#
    );

    let back: Vec<Segment> = serde_json::from_str(&json).unwrap();
    assert_eq!(back[1].kind, SegmentKind::FinalAnswer);
}
