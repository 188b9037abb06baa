use std::error::Error;
use std::fmt;

/// Returned when a command is sent to a store whose task has stopped.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StoreClosedError;

impl fmt::Debug for StoreClosedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClosedError").finish()
    }
}

impl fmt::Display for StoreClosedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "the conversation store has stopped".fmt(f)
    }
}

impl Error for StoreClosedError {}
