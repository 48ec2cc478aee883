//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// specrig - Test automation project scaffolding.
#[derive(Debug, Parser)]
#[command(name = "specrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tool home holding config.yml, template.properties and plugins
    #[arg(long, global = true, env = "SPECRIG_HOME", value_name = "PATH")]
    pub home: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a project from a template
    Init(InitArgs),

    /// Manage template locations
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Template name, template archive URL, or path to a template .zip
    #[arg(required_unless_present = "list", conflicts_with = "list")]
    pub template: Option<String>,

    /// List the available template names
    #[arg(long)]
    pub list: bool,

    /// Hide output of the language runner installation
    #[arg(long)]
    pub silent: bool,
}

/// Arguments for the `template` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateSubcommand,
}

/// Template subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TemplateSubcommand {
    /// List all templates and their locations.
    List {
        /// Output as JSON.
        #[arg(long)]
        machine_readable: bool,
    },
    /// Show the location of a template.
    Get {
        /// Template name.
        name: String,
    },
    /// Add a template or change its location.
    Set {
        /// Template name.
        name: String,
        /// Absolute URI of the template archive.
        location: String,
    },
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
