//! A viewer for ReAct agent transcripts.
//!
//! The crate includes a CLI tool that renders an agent log in the
//! terminal. You can also use it as a library to keep a parsed
//! conversation in your own host app, see [`Session`].

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

pub mod agent_log;
pub mod config;
pub mod render;
mod session;

pub use session::{Session, SessionBuilder};

/// Re-exports of [`react_view_core`] crate.
pub mod core {
    pub use react_view_core::*;
}

/// Re-exports of [`react_view_transcript`] crate.
pub mod transcript {
    pub use react_view_transcript::*;
}
