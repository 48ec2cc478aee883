//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations after bringing the templates
//! file up to date.

pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod template;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use init::TemplateSource;
