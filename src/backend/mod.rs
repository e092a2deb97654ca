//! ts2dart translator backend
//!
//! This module turns parsed source files into Dart source text.
//!
//! The pipeline is a single pass:
//! 1. Parsed [`Program`](crate::frontend::Program) from the frontend
//! 2. [`translate_program`] walks each file's tree and appends tokens to one [`OutputBuffer`]
//! 3. The buffer's text is the result
//!
//! ## Module Organization
//!
//! - `translator/` - dispatch visitor and per-construct emission rules
//! - `output.rs` - token sink
//! - `errors.rs` - translation errors

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod output;
mod translator;

pub use errors::TranslateError;
pub use output::OutputBuffer;
pub use translator::{Translator, translate_program, translate_program_with};
