//! Top-level error type for the library entry points.

use std::path::PathBuf;

use crate::backend::TranslateError;
use crate::frontend::SyntaxErrors;

/// Any failure of a read → parse → translate run.
#[derive(Debug, thiserror::Error)]
pub enum Ts2DartError {
    #[error("Error reading file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file '{}' is too large ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error(transparent)]
    Syntax(#[from] SyntaxErrors),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}
