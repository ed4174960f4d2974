//! The command-executing client seam
//!
//! The loader consumes a client through exactly one capability: execute a
//! named command with an ordered list of string arguments. Modeling that as
//! a single-method trait keeps the loader testable with a recording fake in
//! place of a live store connection.

use crate::common::{Error, Result};

/// A client that can execute one data-store command
///
/// Implementations are thin pass-throughs to whatever command executor the
/// test scenario talks to. Replies are discarded: fixture loading only cares
/// whether a command succeeded.
pub trait CommandExecutor {
    /// Execute `command` with `args`, in order, all as plain text
    fn execute(&mut self, command: &str, args: &[String]) -> Result<()>;
}

/// A recorded command dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub args: Vec<String>,
}

/// Recording stand-in for a live client
///
/// Captures every dispatch in order. Can be armed to fail at a given call
/// index to exercise short-circuit behavior.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Vec<RecordedCall>,
    fail_at: Option<usize>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `index`-th dispatch (zero-based) with a dispatch error
    ///
    /// The rejected call is not recorded.
    pub fn fail_at(index: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(index),
        }
    }

    /// All dispatches observed so far, in dispatch order
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, command: &str, args: &[String]) -> Result<()> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(Error::dispatch(command, "injected failure"));
        }
        self.calls.push(RecordedCall {
            command: command.to_string(),
            args: args.to_vec(),
        });
        Ok(())
    }
}
