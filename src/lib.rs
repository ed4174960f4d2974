//! kv-fixtures - replay scripted data-store commands for test setup
//!
//! Reads a plain-text fixture file (one command per line, fields separated
//! by `||`) and dispatches every non-comment line to a command-executing
//! client, strictly in file order.

pub mod common;
pub mod executor;
pub mod fixture;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use executor::{CommandExecutor, RecordingExecutor};
pub use fixture::{replay, replay_path};
