//! Define error types for syntax tree → Dart emission.
//!
//! These errors represent *translation* failures (as opposed to lexing or parsing): the input parsed fine but uses a
//! construct the translator has no emission rule for.
//!
//! ## Notes
//!
//! - Translation is fail-fast: the first error aborts the whole program and no partial output is returned.
//! - The `Display` form is `<file>:<line>:<column>: <message>` with 1-based line and column.

use ts2dart_syntax::ast::{SourceFile, Span};

/// Error during translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TranslateError {
    #[error("{file}:{line}:{column}: {message}")]
    #[diagnostic(code(ts2dart::unsupported))]
    Unsupported {
        file: String,
        line: usize,
        column: usize,
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TranslateError {
    /// Build an error located at the start of `span` in `file`.
    pub fn unsupported(file: &SourceFile, span: Span, message: impl Into<String>) -> Self {
        let (line, column) = file.line_and_column(span.start);
        TranslateError::Unsupported {
            file: file.file_name.clone(),
            line,
            column,
            message: message.into(),
            help: None,
        }
    }

    /// Attach a suggestion shown by fancy (`miette`) renderers.
    pub fn with_help(self, text: impl Into<String>) -> Self {
        match self {
            TranslateError::Unsupported {
                file,
                line,
                column,
                message,
                ..
            } => TranslateError::Unsupported {
                file,
                line,
                column,
                message,
                help: Some(text.into()),
            },
        }
    }

    /// The bare message without the location prefix.
    pub fn message(&self) -> &str {
        match self {
            TranslateError::Unsupported { message, .. } => message,
        }
    }
}
