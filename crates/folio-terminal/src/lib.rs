//! Command interpreter and terminal subsystem.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name and aliases. A `Session` owns
//! the registry, the output log, history and theme, and runs submissions
//! through a virtual-time scheduler so delays are deterministic.

pub mod clock;
mod commands;
pub mod completion;
pub mod content;
pub mod effects;
mod fun_commands;
pub mod history;
pub mod input;
mod interpreter;
pub mod message;
pub mod output;
pub mod scheduler;
pub mod session;
mod shell_commands;
#[cfg(test)]
mod test_utils;
pub mod tokenizer;

/// The welcome panel shown at start-up and after `clear`.
pub use commands::welcome_panel;
/// Help grouping for commands.
pub use interpreter::Category;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (replies, clear, timed sequences).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// What a running command may read or touch.
pub use interpreter::Context;
pub use session::{Session, Submission};
