use react_view::SessionBuilder;
use react_view::agent_log::{Turn, split_log};
use react_view::transcript::SegmentKind;

const LOG: &str = "\
Thought: I should read the meeting first.
Action: extract_meeting_basic_info
Action Input: {\"meeting\": \"weekly sync\"}
Observation: {\"date\": \"2025-01-06\", \"attendees\": 4}
Thought: Now the agenda.
Action: parse_meeting_agenda_conclusion
Action Input: {\"meeting\": \"weekly sync\"}
Observation: budget approved
Thought: I know the final answer.
Final Answer: The weekly sync approved the budget.
";

#[tokio::test]
async fn test_replay_log_into_session() {
    let mut session = SessionBuilder::new()
        .with_question("Summarize the meeting")
        .build();
    for turn in split_log(LOG) {
        match turn {
            Turn::Model(text) => session.push_delta(&text),
            Turn::Observation(text) => session.observe(text).unwrap(),
        }
    }
    session.finish_turn().unwrap();

    let conversation = session.snapshot().await.unwrap();
    let kinds: Vec<_> =
        conversation.messages().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Thought,
            SegmentKind::Action,
            SegmentKind::ActionInput,
            SegmentKind::Observation,
            SegmentKind::Thought,
            SegmentKind::Action,
            SegmentKind::ActionInput,
            SegmentKind::Observation,
            SegmentKind::Thought,
            SegmentKind::FinalAnswer,
        ]
    );

    let map = session.action_observations().await.unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(
        map["extract_meeting_basic_info"],
        "{\"date\": \"2025-01-06\", \"attendees\": 4}"
    );
    assert_eq!(map["parse_meeting_agenda_conclusion"], "budget approved");
}

#[tokio::test]
async fn test_live_segments_while_streaming() {
    let mut session = SessionBuilder::new().build();
    let mut seen = vec![];
    for delta in ["Thought: ", "thinking", "\nFinal ", "Answer: 42"] {
        session.push_delta(delta);
        seen.push(session.live_segments().len());
    }
    // The final answer appears only once its marker is complete.
    assert_eq!(seen, vec![1, 1, 1, 2]);
}
