//! Primitive type vocabulary and the TypeScript → Dart type keyword table.
//!
//! This registry covers the TypeScript primitive type keywords that the front-end recognizes, and records for each
//! one the Dart keyword it is rewritten to. It is the one place where type vocabulary genuinely changes between the
//! source and the target language.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - A primitive with no Dart keyword (`dart` is `None`) is recognized by the parser but has no translation; the
//!   translator reports it as an unsupported construct.
//!
//! ## Examples
//! ```rust
//! use ts2dart_core::lang::types::{self, PrimitiveTypeId};
//!
//! assert_eq!(types::from_str("number"), Some(PrimitiveTypeId::Number));
//! assert_eq!(types::dart_keyword(PrimitiveTypeId::Number), Some("num"));
//! assert_eq!(types::dart_keyword(PrimitiveTypeId::Any), None);
//! ```

use super::keywords::KeywordId;

/// Stable identifier for primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTypeId {
    Number,
    String,
    Void,
    Boolean,
    Any,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub id: PrimitiveTypeId,
    /// TypeScript spelling.
    pub canonical: &'static str,
    /// Keyword the spelling lexes to.
    pub keyword: KeywordId,
    /// Dart keyword emitted for this type, if it has one.
    pub dart: Option<&'static str>,
    pub description: &'static str,
}

/// Registry of primitive types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(
        PrimitiveTypeId::Number,
        "number",
        KeywordId::Number,
        Some("num"),
        "IEEE-754 number; Dart's common supertype of int and double.",
    ),
    info(
        PrimitiveTypeId::String,
        "string",
        KeywordId::String,
        Some("String"),
        "Text value.",
    ),
    info(
        PrimitiveTypeId::Void,
        "void",
        KeywordId::Void,
        Some("void"),
        "Absence of a value; only meaningful as a return type.",
    ),
    info(PrimitiveTypeId::Boolean, "boolean", KeywordId::Boolean, None, "Truth value."),
    info(PrimitiveTypeId::Any, "any", KeywordId::Any, None, "Opt-out of static typing."),
];

/// Return the full metadata entry for a primitive type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    PRIMITIVE_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("INVARIANT: every PrimitiveTypeId has a registry entry")
}

/// Return the TypeScript spelling for a primitive type.
pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the Dart keyword a primitive type is rewritten to.
pub fn dart_keyword(id: PrimitiveTypeId) -> Option<&'static str> {
    info_for(id).dart
}

/// Resolve a spelling to a [`PrimitiveTypeId`].
pub fn from_str(s: &str) -> Option<PrimitiveTypeId> {
    PRIMITIVE_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Resolve a keyword to the primitive type it names, if any.
pub fn from_keyword(id: KeywordId) -> Option<PrimitiveTypeId> {
    PRIMITIVE_TYPES.iter().find(|t| t.keyword == id).map(|t| t.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PrimitiveTypeId,
    canonical: &'static str,
    keyword: KeywordId,
    dart: Option<&'static str>,
    description: &'static str,
) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        keyword,
        dart,
        description,
    }
}
