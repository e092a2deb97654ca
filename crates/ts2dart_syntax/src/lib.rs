//! Syntax front-end for the TypeScript subset understood by `ts2dart`: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and is shared by the translator, the CLI, and the fuzz targets.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve names or check types.
//! - Vocabulary identity (keywords/operators/punctuation/primitive types) comes from `ts2dart_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use ts2dart_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("var a: number = 1;\n").unwrap();
//! let statements = parser::parse(&tokens).unwrap();
//! assert_eq!(statements.len(), 1);
//! ```
//!
//! ## See also
//! - `ts2dart_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
