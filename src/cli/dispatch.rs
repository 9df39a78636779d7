// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use crate::commit::strip_comments;
use crate::config::CmlintConfig;
use crate::error::{CmlintError, ConfigError, LintError, Result, ResultExt};
use crate::rules::RuleEngine;

use super::args::{Cli, Commands, InitArgs, LintArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, &load_config(&cli)?, args),
        Commands::Config => run_config(&load_config(&cli)?),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<CmlintConfig> {
    match &cli.config {
        Some(config_path) => CmlintConfig::load_from(config_path),
        None => CmlintConfig::load(),
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &CmlintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    // Validate before reading input so config problems surface first.
    let engine = RuleEngine::new(config.to_rule_config()?);

    let raw = read_message(&args)?;
    let message = if args.keep_comments {
        raw
    } else {
        strip_comments(&raw, args.comment_char)
    };

    let verdict = engine.evaluate(&message);
    let passed = verdict.passes(args.strict);

    if !(args.quiet && passed) {
        verdict.print(&message, cli.format);
    }

    if passed {
        Ok(())
    } else {
        Err(CmlintError::Lint(LintError::ViolationsFound {
            errors: verdict.error_count(),
            warnings: verdict.warning_count(),
        }))
    }
}

/// Read the commit message from the file argument or stdin.
fn read_message(args: &LintArgs) -> Result<String> {
    match &args.file {
        Some(path) if !args.reads_stdin() => {
            tracing::debug!("Reading message from {:?}", path);
            std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
        }
        _ => {
            tracing::debug!("Reading message from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Run the config command.
fn run_config(config: &CmlintConfig) -> Result<()> {
    // Refuse to print something the linter would reject.
    config.to_rule_config()?;

    let rendered = toml::to_string_pretty(config).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to render configuration: {}", e),
        })
    })?;
    print!("{}", rendered);

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(CmlintError::Config(ConfigError::AlreadyExists {
            path: args.path.clone(),
        }));
    }

    std::fs::write(&args.path, example_config())
        .context(format!("Failed to write {}", args.path.display()))?;

    println!("✓ Created {}", args.path.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
