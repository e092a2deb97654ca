#![forbid(unsafe_code)]
//! ts2dart: translate a subset of TypeScript into Dart
//!
//! This crate provides the translator: frontend (program loading on top of the `ts2dart_syntax` lexer and parser),
//! backend (a single-pass syntax-directed emitter), and the command-line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a translator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod pipeline;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::{TranslateError, translate_program};
pub use config::TranslateConfig;
pub use errors::Ts2DartError;
pub use frontend::{Program, is_declaration_file};
pub use pipeline::{translate_files, translate_source};
