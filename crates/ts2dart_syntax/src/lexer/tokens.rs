//! Token types for the TypeScript lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved and contextual words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Numeric and regular-expression literals keep their raw source text; the translator re-emits them verbatim.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use ts2dart_core::lang::keywords::{self, KeywordId};
use ts2dart_core::lang::operators::OperatorId;
use ts2dart_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Raw numeric literal text (`1.23e-4`, `0xFF`).
    Number(String),
    /// Decoded string literal value (escapes resolved, quotes removed).
    String(String),
    /// Raw regular-expression literal text including slashes and flags.
    Regex(String),

    // ========== Special ==========
    Eof, // end of file
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Whether a line terminator separates this token from the previous one.
    ///
    /// The parser uses this for automatic semicolon insertion.
    pub newline_before: bool,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            newline_before: false,
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if it is one.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
