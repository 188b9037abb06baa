use std::fmt::{self, Debug};

use tokio::select;
use tokio::sync::{mpsc, oneshot, watch};

use crate::conversation::{ActionObservations, Conversation};

pub enum Command {
    AppendTranscript(String),
    AppendObservation(String),
    SetQuestion(String),
    Reset,
    Snapshot(oneshot::Sender<Conversation>),
    ActionObservations(oneshot::Sender<ActionObservations>),
}

impl Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AppendTranscript(text) => f
                .debug_struct("AppendTranscript")
                .field("len", &text.len())
                .finish(),
            Command::AppendObservation(text) => f
                .debug_struct("AppendObservation")
                .field("len", &text.len())
                .finish(),
            Command::SetQuestion(_) => f.write_str("SetQuestion"),
            Command::Reset => f.write_str("Reset"),
            Command::Snapshot(_) => f.write_str("Snapshot"),
            Command::ActionObservations(_) => {
                f.write_str("ActionObservations")
            }
        }
    }
}

impl Command {
    fn apply(self, conversation: &mut Conversation) {
        match self {
            Command::AppendTranscript(text) => {
                conversation.append_transcript(&text);
            }
            Command::AppendObservation(text) => {
                conversation.append_observation(text);
            }
            Command::SetQuestion(question) => {
                conversation.set_question(question);
            }
            Command::Reset => *conversation = Conversation::default(),
            Command::Snapshot(reply) => {
                // The caller may have given up waiting.
                reply.send(conversation.clone()).ok();
            }
            Command::ActionObservations(reply) => {
                reply.send(conversation.extract_action_observation()).ok();
            }
        }
    }
}

pub async fn run_store(
    mut conversation: Conversation,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    mut kill_rx: watch::Receiver<bool>,
) {
    debug!("started");
    loop {
        let cmd = select! {
            biased;

            _ = kill_rx.changed() => {
                break;
            }
            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else {
                    break;
                };
                cmd
            }
        };
        trace!("received command: {cmd:?}");
        cmd.apply(&mut conversation);
    }
    debug!(
        messages = conversation.messages.len(),
        "will terminate"
    );
}
