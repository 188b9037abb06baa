//! Renders a ReAct agent log in the terminal.
//!
//! Reads the log from the file given as the first argument, or from stdin
//! when no argument (or `-`) is given.

#[macro_use]
extern crate tracing;

use std::env;
use std::io as std_io;
use std::process::ExitCode;

use react_view::SessionBuilder;
use react_view::agent_log::{Turn, split_log};
use react_view::config::{OutputFormat, ViewConfigBuilder};
use react_view::render::render;
use tokio::fs;
use tokio::io::{self, AsyncReadExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std_io::stderr)
        .init();

    let config = match ViewConfigBuilder::from_env() {
        Ok(builder) => builder.build(),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!("using {config:?}");

    if config.format == OutputFormat::Schema {
        let mut stdout = std_io::stdout().lock();
        let res = render(&mut stdout, &Default::default(), &config);
        return finish(&mut stdout, res);
    }

    let path = env::args().nth(1);
    let Some(log) = read_input(path.as_deref()).await else {
        return ExitCode::FAILURE;
    };

    let mut session = SessionBuilder::new().build();
    for turn in split_log(&log) {
        let res = match turn {
            Turn::Model(text) => {
                session.push_delta(&text);
                Ok(())
            }
            Turn::Observation(text) => session.observe(text),
        };
        if let Err(err) = res {
            error!("failed to record turn: {err}");
            return ExitCode::FAILURE;
        }
    }

    let conversation = match session.finish_turn() {
        Ok(()) => session.snapshot().await,
        Err(err) => Err(err),
    };
    let conversation = match conversation {
        Ok(conversation) => conversation,
        Err(err) => {
            error!("failed to read conversation: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("loaded {} segment(s)", conversation.messages().len());

    let mut stdout = std_io::stdout().lock();
    let res = render(&mut stdout, &conversation, &config);
    finish(&mut stdout, res)
}

async fn read_input(path: Option<&str>) -> Option<String> {
    let res = match path {
        None | Some("-") => {
            let mut log = String::new();
            io::stdin().read_to_string(&mut log).await.map(|_| log)
        }
        Some(path) => fs::read_to_string(path).await,
    };
    match res {
        Ok(log) => Some(log),
        Err(err) => {
            eprintln!("error reading {}: {err}", path.unwrap_or("stdin"));
            None
        }
    }
}

fn finish<W: std_io::Write>(
    out: &mut W,
    res: std_io::Result<()>,
) -> ExitCode {
    let res = res.and_then(|_| out.flush());
    match res {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed the pipe, e.g. `| head`.
        Err(err) if err.kind() == std_io::ErrorKind::BrokenPipe => {
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error writing output: {err}");
            ExitCode::FAILURE
        }
    }
}
