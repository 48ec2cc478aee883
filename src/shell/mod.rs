//! Process execution for post install hooks and plugin installation.

pub mod command;

pub use command::{execute, execute_words, CommandOptions, CommandResult};
