//! Diagnostics and error reporting for the front-end.
//!
//! Lexer and parser failures are reported as [`CompileError`]s carrying a byte [`Span`]. They can be rendered as
//! plain text with [`format_error`] or handed to `miette` (they implement [`miette::Diagnostic`]) for a fancy report
//! with a labelled source excerpt.

use crate::ast::Span;

/// A front-end error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lexical error (bad character, unterminated literal).
    Error,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl miette::Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self.kind {
            ErrorKind::Error => "ts2dart::lex",
            ErrorKind::Syntax => "ts2dart::syntax",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let label = miette::LabeledSpan::new_with_span(None, (self.span.start, self.span.len()));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Format an error with source context as plain text.
///
/// The first line is always `<file>:<line>:<column>: <kind>: <message>`, followed by the offending source line, a
/// caret marker, and any notes/hints.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);

    let mut out = format!(
        "{file}:{line}:{col}: {kind}: {message}\n",
        file = file_name,
        line = line_num,
        col = col_num,
        kind = error.kind,
        message = error.message,
    );

    let gutter = " ".repeat(format!("{}", line_num).len());
    out.push_str(&format!("  {gutter} |\n"));
    out.push_str(&format!("  {line_num} | {line_text}\n"));

    let underline_len = error
        .span
        .len()
        .min(line_text.len().saturating_sub(col_num.saturating_sub(1)))
        .max(1);
    out.push_str(&format!(
        "  {gutter} | {}{}\n",
        " ".repeat(col_num.saturating_sub(1)),
        "^".repeat(underline_len)
    ));

    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &error.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }

    out
}

/// Get line number, column number, and line text for a byte offset
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}
