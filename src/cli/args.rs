// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmlint - Conventional commit message linter
///
/// Reads a commit message from a file or standard input and checks it
/// against the configured rules.
#[derive(Parser, Debug)]
#[command(name = "cmlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint reading stdin)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CMLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message (default command)
    Lint(LintArgs),

    /// Print the effective configuration
    Config,

    /// Write an example cmlint.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// File containing the message; reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Keep git comment lines instead of stripping them
    #[arg(long)]
    pub keep_comments: bool,

    /// Character that starts a git comment line
    #[arg(long, default_value_t = '#')]
    pub comment_char: char,

    /// Only print output when the message fails
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the configuration
    #[arg(long, default_value = "cmlint.toml")]
    pub path: PathBuf,
}

impl LintArgs {
    /// Whether the message comes from standard input.
    pub fn reads_stdin(&self) -> bool {
        match &self.file {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Lint(LintArgs {
            comment_char: '#',
            ..LintArgs::default()
        }))
    }
}
