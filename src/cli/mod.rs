//! CLI module for the ts2dart translator
//!
//! This module provides the command-line interface.
//!
//! ## Usage
//!
//! - `ts2dart <FILE>...` - translate the files and print the Dart text
//! - `ts2dart -o out.dart <FILE>...` - write the Dart text to a file
//! - `ts2dart --tokens <FILE>` / `--parse <FILE>` - dump tokens or the syntax tree (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::TranslateConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Translate TypeScript source files into Dart
#[derive(Parser, Debug)]
#[command(name = "ts2dart")]
#[command(version = VERSION)]
#[command(about = "Translate TypeScript source files into Dart", long_about = None)]
pub struct Cli {
    /// Files to translate, in order
    #[arg(value_name = "FILE", required_unless_present_any = ["tokens_file", "parse_file"])]
    pub files: Vec<PathBuf>,

    /// Write the translation here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Translate `.d.ts` declaration files too
    #[arg(long = "include-declarations")]
    pub include_declarations: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "tokens", value_name = "FILE", conflicts_with_all = ["files", "parse_file"])]
    pub tokens_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "files")]
    pub parse_file: Option<PathBuf>,
}

impl Cli {
    /// Build the translation config from the flags.
    pub fn config(&self) -> TranslateConfig {
        TranslateConfig::default().with_skip_declaration_files(!self.include_declarations)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = &cli.tokens_file {
        return commands::tokens_file(file);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file);
    }

    let config = cli.config();
    tracing::debug!(files = cli.files.len(), ?config, "translating");
    commands::translate(&cli.files, cli.output.as_deref(), &config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_files() {
        let cli = Cli::try_parse_from(["ts2dart", "a.ts", "b.ts"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.ts"), PathBuf::from("b.ts")]);
        assert!(cli.output.is_none());
        assert!(cli.config().skip_declaration_files);
    }

    #[test]
    fn test_cli_parse_output_and_declarations() {
        let cli = Cli::try_parse_from(["ts2dart", "-o", "out.dart", "--include-declarations", "lib.d.ts"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.dart")));
        assert!(!cli.config().skip_declaration_files);
    }

    #[test]
    fn test_cli_requires_files() {
        assert!(Cli::try_parse_from(["ts2dart"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["ts2dart", "--tokens", "test.ts"]).unwrap();
        assert!(cli.tokens_file.is_some());
        assert!(cli.files.is_empty());

        let cli = Cli::try_parse_from(["ts2dart", "--parse", "test.ts"]).unwrap();
        assert!(cli.parse_file.is_some());
    }

    #[test]
    fn test_cli_debug_flags_conflict_with_files() {
        assert!(Cli::try_parse_from(["ts2dart", "--parse", "test.ts", "other.ts"]).is_err());
    }
}
