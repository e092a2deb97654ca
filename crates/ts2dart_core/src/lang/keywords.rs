//! Define the keyword vocabulary for the TypeScript subset.
//!
//! This module is the single source of truth for keywords: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and whether the word is reserved.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - TypeScript has *contextual* keywords (`constructor`, `number`, `public`, ...) that are only special in certain
//!   positions and remain valid identifiers elsewhere. Those entries have [`KeywordInfo::reserved`] set to `false`;
//!   the parser accepts them wherever an identifier is expected.
//!
//! ## Examples
//! ```rust
//! use ts2dart_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("extends"), Some(KeywordId::Extends));
//! assert!(keywords::is_reserved(KeywordId::Class));
//! assert!(!keywords::is_reserved(KeywordId::Constructor));
//! ```

/// Stable identifier for every keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Var,
    Let,
    Const,
    Function,
    Class,
    Interface,
    Extends,
    Implements,
    Constructor,
    Enum,
    Export,
    Import,

    // Member modifiers
    Public,
    Private,
    Protected,
    Static,

    // Control flow / statements
    If,
    Else,
    While,
    Do,
    For,
    Break,
    Continue,
    Return,
    Switch,
    Case,
    Default,
    Throw,
    Try,
    Catch,
    Finally,

    // Expressions
    New,
    This,
    Super,
    Typeof,
    Instanceof,
    In,
    Delete,

    // Literals
    True,
    False,
    Null,

    // Primitive types
    Void,
    Number,
    String,
    Boolean,
    Any,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    ControlFlow,
    Expression,
    Literal,
    Type,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Reserved words can never be used as identifiers; contextual ones can.
    pub reserved: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    reserved(KeywordId::Var, "var", KeywordCategory::Declaration),
    reserved(KeywordId::Let, "let", KeywordCategory::Declaration),
    reserved(KeywordId::Const, "const", KeywordCategory::Declaration),
    reserved(KeywordId::Function, "function", KeywordCategory::Declaration),
    reserved(KeywordId::Class, "class", KeywordCategory::Declaration),
    reserved(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    reserved(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    reserved(KeywordId::Implements, "implements", KeywordCategory::Declaration),
    contextual(KeywordId::Constructor, "constructor", KeywordCategory::Declaration),
    reserved(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    reserved(KeywordId::Export, "export", KeywordCategory::Declaration),
    reserved(KeywordId::Import, "import", KeywordCategory::Declaration),
    // Member modifiers
    contextual(KeywordId::Public, "public", KeywordCategory::Modifier),
    contextual(KeywordId::Private, "private", KeywordCategory::Modifier),
    contextual(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    contextual(KeywordId::Static, "static", KeywordCategory::Modifier),
    // Control flow / statements
    reserved(KeywordId::If, "if", KeywordCategory::ControlFlow),
    reserved(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    reserved(KeywordId::While, "while", KeywordCategory::ControlFlow),
    reserved(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    reserved(KeywordId::For, "for", KeywordCategory::ControlFlow),
    reserved(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    reserved(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    reserved(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    reserved(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    reserved(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    reserved(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    reserved(KeywordId::Throw, "throw", KeywordCategory::ControlFlow),
    reserved(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    reserved(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    reserved(KeywordId::Finally, "finally", KeywordCategory::ControlFlow),
    // Expressions
    reserved(KeywordId::New, "new", KeywordCategory::Expression),
    reserved(KeywordId::This, "this", KeywordCategory::Expression),
    reserved(KeywordId::Super, "super", KeywordCategory::Expression),
    reserved(KeywordId::Typeof, "typeof", KeywordCategory::Expression),
    reserved(KeywordId::Instanceof, "instanceof", KeywordCategory::Expression),
    reserved(KeywordId::In, "in", KeywordCategory::Expression),
    reserved(KeywordId::Delete, "delete", KeywordCategory::Expression),
    // Literals
    reserved(KeywordId::True, "true", KeywordCategory::Literal),
    reserved(KeywordId::False, "false", KeywordCategory::Literal),
    reserved(KeywordId::Null, "null", KeywordCategory::Literal),
    // Primitive types
    reserved(KeywordId::Void, "void", KeywordCategory::Type),
    contextual(KeywordId::Number, "number", KeywordCategory::Type),
    contextual(KeywordId::String, "string", KeywordCategory::Type),
    contextual(KeywordId::Boolean, "boolean", KeywordCategory::Type),
    contextual(KeywordId::Any, "any", KeywordCategory::Type),
];

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return `true` if the keyword can never be used as an identifier.
pub fn is_reserved(id: KeywordId) -> bool {
    info_for(id).reserved
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn reserved(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        reserved: true,
    }
}

const fn contextual(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        reserved: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn spellings_are_unique() {
        let mut seen = HashSet::new();
        for k in KEYWORDS {
            assert!(seen.insert(k.canonical), "duplicate keyword spelling {:?}", k.canonical);
        }
    }

    #[test]
    fn round_trip_spelling() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn contextual_keywords_are_not_reserved() {
        for id in [
            KeywordId::Constructor,
            KeywordId::Number,
            KeywordId::String,
            KeywordId::Boolean,
            KeywordId::Any,
            KeywordId::Public,
            KeywordId::Static,
        ] {
            assert!(!is_reserved(id), "{id:?} should be contextual");
        }
        assert!(is_reserved(KeywordId::Void));
        assert_eq!(info_for(KeywordId::Void).category, KeywordCategory::Type);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("Class"), None);
        assert_eq!(from_str("NULL"), None);
    }
}
