//! One-call entry points: read → parse → translate.

use std::path::PathBuf;

use crate::backend;
use crate::config::TranslateConfig;
use crate::errors::Ts2DartError;
use crate::frontend::Program;

/// Parse and translate a single in-memory source.
///
/// The file name is only used in diagnostics; a `.d.ts` name is translated like any other.
///
/// ## Examples
/// ```rust
/// let dart = ts2dart::translate_source("main.ts", "var a: number = 1;").unwrap();
/// assert_eq!(dart, " num a = 1 ;\n");
/// ```
pub fn translate_source(file_name: &str, text: &str) -> Result<String, Ts2DartError> {
    let file = Program::parse_source(file_name, text)?;
    let program = Program { files: vec![file] };
    let config = TranslateConfig::default().with_skip_declaration_files(false);
    Ok(backend::translate_program_with(&program, &config)?)
}

/// Read, filter, parse and translate `paths` in order.
///
/// ## Errors
/// The first I/O, syntax, or translation failure aborts the run.
#[tracing::instrument(skip_all, fields(files = paths.len()))]
pub fn translate_files(paths: &[PathBuf], config: &TranslateConfig) -> Result<String, Ts2DartError> {
    let program = Program::load(paths, config)?;
    tracing::debug!(parsed = program.files.len(), "program loaded");
    Ok(backend::translate_program_with(&program, config)?)
}
