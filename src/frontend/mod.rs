//! ts2dart frontend
//!
//! - `lexer`, `parser`, `ast`, `diagnostics`: provided by the shared `ts2dart_syntax` crate
//! - `program`: reading, size-checking and parsing the input files of one translation

// Syntax components are provided by the shared ts2dart_syntax crate.
pub use ts2dart_syntax::{ast, diagnostics, lexer, parser};

pub mod program;

pub use program::{Program, SyntaxErrors, is_declaration_file, read_source};
