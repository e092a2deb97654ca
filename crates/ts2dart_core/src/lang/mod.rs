//! ts2dart language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation and
//! primitive types.
//!
//! The design goal is to avoid stringly-typed checks scattered across the front-end and translator.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use ts2dart_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Class), "class");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod types;
