//! Parser for the TypeScript subset
//!
//! Converts a token stream into a list of top-level statements (each a [`SyntaxNode`]). The grammar covers
//! declarations (variables, functions, classes, interfaces), simple statements, and an expression language with
//! TypeScript precedence. Semicolons may be omitted before `}`, at end of file, or at a line break.
//!
//! ## Examples
//!
//! ```rust
//! use ts2dart_syntax::{lexer, parser};
//!
//! let source = "class X extends Y {\n  x: number = 42;\n}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let statements = parser::parse(&tokens).unwrap();
//! assert_eq!(statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{self, Token, TokenKind};
use ts2dart_core::lang::keywords::{self, KeywordId};
use ts2dart_core::lang::operators::{self, Associativity, Fixity, OperatorId};
use ts2dart_core::lang::punctuation::PunctuationId;
use ts2dart_core::lang::types;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
