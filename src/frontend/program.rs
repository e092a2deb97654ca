//! Program loading for multi-file translations
//!
//! A [`Program`] is the ordered set of parsed input files a translation works on. Files are read from disk (or taken
//! from in-memory sources), size-checked, lexed, and parsed here; the translator never touches the filesystem.
//!
//! ## Usage
//!
//! ```rust
//! use ts2dart::frontend::Program;
//!
//! let program = Program::from_sources([("main.ts", "var a: number = 1;")]).unwrap();
//! assert_eq!(program.files.len(), 1);
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DECLARATION_SUFFIX, TranslateConfig};
use crate::errors::Ts2DartError;
use crate::frontend::ast::SourceFile;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::parser;

/// Ordered collection of parsed source files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub files: Vec<SourceFile>,
}

/// Lexer or parser errors for one file, kept with the text needed to render them.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxErrors {
    pub file_name: String,
    pub text: String,
    pub errors: Vec<CompileError>,
}

impl fmt::Display for SyntaxErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut msg = String::new();
        for err in &self.errors {
            msg.push_str(&diagnostics::format_error(&self.file_name, &self.text, err));
        }
        write!(f, "{}", msg.trim_end())
    }
}

impl std::error::Error for SyntaxErrors {}

/// Return `true` if `file_name` names a TypeScript declaration file (`.d.ts`).
///
/// This checks the fixed [`DECLARATION_SUFFIX`] only. Translation decides what to skip with
/// [`TranslateConfig::skips`], which honors a configured suffix.
pub fn is_declaration_file(file_name: &str) -> bool {
    file_name.ends_with(DECLARATION_SUFFIX)
}

/// Read a source file, rejecting it up front if it exceeds `config.max_source_size`.
pub fn read_source(path: &Path, config: &TranslateConfig) -> Result<String, Ts2DartError> {
    let io_error = |source| Ts2DartError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > config.max_source_size {
        return Err(Ts2DartError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: config.max_source_size,
        });
    }

    fs::read_to_string(path).map_err(io_error)
}

impl Program {
    /// Read and parse `paths` in order.
    ///
    /// Files that `config` skips are not read at all.
    ///
    /// ## Errors
    /// - [`Ts2DartError::Io`] / [`Ts2DartError::TooLarge`] if a file cannot be read
    /// - [`Ts2DartError::Syntax`] for the first file that fails to lex or parse
    pub fn load(paths: &[PathBuf], config: &TranslateConfig) -> Result<Self, Ts2DartError> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let file_name = path.display().to_string();
            if config.skips(&file_name) {
                tracing::debug!(file = %file_name, "skipping declaration file");
                continue;
            }
            let text = read_source(path, config)?;
            files.push(Self::parse_source(&file_name, &text)?);
        }
        Ok(Self { files })
    }

    /// Parse in-memory `(file_name, text)` pairs in order.
    pub fn from_sources<'s>(sources: impl IntoIterator<Item = (&'s str, &'s str)>) -> Result<Self, SyntaxErrors> {
        let files = sources
            .into_iter()
            .map(|(file_name, text)| Self::parse_source(file_name, text))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { files })
    }

    /// Lex and parse one file.
    pub fn parse_source(file_name: &str, text: &str) -> Result<SourceFile, SyntaxErrors> {
        parser::parse_source_file(file_name, text).map_err(|errors| SyntaxErrors {
            file_name: file_name.to_string(),
            text: text.to_string(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_suffix() {
        assert!(is_declaration_file("lib.d.ts"));
        assert!(is_declaration_file("dir/node.d.ts"));
        assert!(!is_declaration_file("main.ts"));
        assert!(!is_declaration_file("d.ts.bak"));
    }

    #[test]
    fn default_config_skips_exactly_declaration_files() {
        let config = TranslateConfig::default();
        for name in ["lib.d.ts", "dir/node.d.ts", "main.ts", "d.ts.bak", "a.decl.ts"] {
            assert_eq!(config.skips(name), is_declaration_file(name), "{}", name);
        }

        let custom = TranslateConfig::default().with_declaration_suffix(".decl.ts");
        assert!(custom.skips("a.decl.ts"));
        assert!(!is_declaration_file("a.decl.ts"));
        assert!(!custom.skips("lib.d.ts"));
    }

    #[test]
    fn from_sources_keeps_order() {
        let program = Program::from_sources([("a.ts", "var a;"), ("b.ts", "var b;")]).unwrap();
        let names: Vec<_> = program.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, ["a.ts", "b.ts"]);
    }

    #[test]
    fn syntax_errors_render_with_location() {
        let err = Program::parse_source("bad.ts", "var = 1;").unwrap_err();
        assert_eq!(err.errors.len(), 1);
        let text = err.to_string();
        assert!(text.starts_with("bad.ts:1:5: syntax error:"), "got: {}", text);
        assert!(!text.ends_with('\n'));
    }
}
