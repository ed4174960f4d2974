//! Fixture file replay loop
//!
//! Reads a fixture file line by line and dispatches every non-comment line
//! to the client, strictly in file order. The first failure aborts the
//! remaining lines and propagates to the caller unchanged.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::paths::fixture_path;
use crate::common::{Error, Result};
use crate::executor::CommandExecutor;

use super::parser::{is_comment, tokenize};

/// Replay a fixture file looked up by name under `<cwd>/tests/files/`
pub fn replay<C: CommandExecutor>(file_name: impl AsRef<Path>, client: &mut C) -> Result<()> {
    let path = fixture_path(file_name)?;
    replay_path(&path, client)
}

/// Replay the fixture file at an explicit path
///
/// Success is silent; the error of the first failing dispatch is returned
/// as-is and no later line is processed. The file handle is scoped to this
/// call and released on every exit path.
///
/// A line that is empty after trimming (and is not a comment) is still
/// dispatched, as a single empty-string command name the backend will
/// reject. This matches the fixture format's established behavior and keeps
/// malformed files loud instead of silently shrinking.
pub fn replay_path<C: CommandExecutor>(path: &Path, client: &mut C) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let mut dispatched = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line?;

        if is_comment(&line) {
            continue;
        }

        let mut fields = tokenize(&line).into_iter();
        let command = fields.next().unwrap_or_default();
        let args: Vec<String> = fields.collect();

        tracing::trace!("Dispatching '{}' with {} argument(s)", command, args.len());
        client.execute(&command, &args)?;
        dispatched += 1;
    }

    tracing::debug!("Replayed {} command(s) from {}", dispatched, path.display());
    Ok(())
}
