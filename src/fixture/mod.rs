//! Fixture file replay
//!
//! A fixture file scripts a sequence of setup commands, one per line, that
//! establish data-store state before a test scenario runs. Replay dispatches
//! them through a [`CommandExecutor`](crate::executor::CommandExecutor) in
//! file order.

mod loader;
mod parser;

pub use loader::{replay, replay_path};
pub use parser::{is_comment, tokenize};
