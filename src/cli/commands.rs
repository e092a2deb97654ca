//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use crate::config::TranslateConfig;
use crate::errors::Ts2DartError;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::{lexer, parser, read_source};
use crate::pipeline;

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Translation
// ============================================================================

/// Translate `files` and print the result to stdout, or write it to `output`.
pub fn translate(files: &[PathBuf], output: Option<&Path>, config: &TranslateConfig) -> CliResult<ExitCode> {
    let dart = pipeline::translate_files(files, config).map_err(report)?;

    match output {
        Some(path) => write_output(path, &dart)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(dart.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Write the translation to `path`, replacing any existing file.
fn write_output(path: &Path, text: &str) -> CliResult<()> {
    // Allowed, but worth a note in the logs.
    if path.is_absolute() {
        tracing::warn!("Using absolute output path: {}", path.display());
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        tracing::warn!("Output path {} points outside the working directory", path.display());
    }

    fs::write(path, text)
        .map_err(|e| CliError::failure(format!("Error writing output file '{}': {}", path.display(), e)))
}

fn report(err: Ts2DartError) -> CliError {
    CliError::failure(err.to_string())
}

// ============================================================================
// Debug commands
// ============================================================================

/// Tokenize and display tokens.
pub fn tokens_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = load(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| render(file_path, &source, &errs))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the syntax tree.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = load(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| render(file_path, &source, &errs))?;
    let statements = parser::parse(&tokens).map_err(|errs| render(file_path, &source, &errs))?;

    println!("{:#?}", statements);
    Ok(ExitCode::SUCCESS)
}

fn load(file_path: &Path) -> CliResult<String> {
    read_source(file_path, &TranslateConfig::default()).map_err(report)
}

fn render(file_path: &Path, source: &str, errors: &[CompileError]) -> CliError {
    let file_name = file_path.display().to_string();
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::format_error(&file_name, source, err));
    }
    CliError::failure(msg.trim_end())
}
