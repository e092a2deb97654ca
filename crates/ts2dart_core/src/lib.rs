//! Provide the canonical language vocabulary shared by the ts2dart front-end and translator.
//!
//! This crate is intentionally small and dependency-free. It contains registries for the TypeScript subset the
//! translator understands (reserved words, operators, punctuation) and the primitive type table that maps source
//! type keywords onto Dart keywords.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   emission, tests).

pub mod lang;
