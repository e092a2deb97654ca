//! Operator vocabulary.
//!
//! This module defines the canonical symbol-operator set along with basic metadata such as precedence,
//! associativity and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`instanceof`, `in`, `typeof`) are keywords; see [`crate::lang::keywords`].
//! - `precedence` is a relative ordering where higher binds tighter. Prefix/update operators carry the precedence of
//!   the unary level; the parser handles them outside the binary precedence ladder.
//!
//! ## Examples
//! ```rust
//! use ts2dart_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("==="), Some(OperatorId::EqEqEq));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary), prefix (unary) or an update (`++`/`--`, prefix or postfix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Update,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Update
    PlusPlus,
    MinusMinus,

    // Equality / comparison
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Precedence of the unary level (prefix and update operators).
pub const UNARY_PRECEDENCE: u8 = 150;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", 120, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", 120, Associativity::Left, Fixity::Infix),
    op(OperatorId::Star, "*", 130, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", 130, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, "%", 130, Associativity::Left, Fixity::Infix),
    // Update
    op(OperatorId::PlusPlus, "++", UNARY_PRECEDENCE, Associativity::Right, Fixity::Update),
    op(OperatorId::MinusMinus, "--", UNARY_PRECEDENCE, Associativity::Right, Fixity::Update),
    // Equality / comparison
    op(OperatorId::EqEq, "==", 90, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", 90, Associativity::Left, Fixity::Infix),
    op(OperatorId::EqEqEq, "===", 90, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEqEq, "!==", 90, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", 100, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", 100, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", 100, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", 100, Associativity::Left, Fixity::Infix),
    // Logical
    op(OperatorId::AndAnd, "&&", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::OrOr, "||", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Bang, "!", UNARY_PRECEDENCE, Associativity::Right, Fixity::Prefix),
    // Assignment
    op(OperatorId::Eq, "=", 20, Associativity::Right, Fixity::Infix),
    op(OperatorId::PlusEq, "+=", 20, Associativity::Right, Fixity::Infix),
    op(OperatorId::MinusEq, "-=", 20, Associativity::Right, Fixity::Infix),
    op(OperatorId::StarEq, "*=", 20, Associativity::Right, Fixity::Infix),
    op(OperatorId::SlashEq, "/=", 20, Associativity::Right, Fixity::Infix),
    op(OperatorId::PercentEq, "%=", 20, Associativity::Right, Fixity::Infix),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the binary precedence of an operator, or `None` if it is not an infix operator.
pub fn binary_precedence(id: OperatorId) -> Option<u8> {
    let info = info_for(id);
    (info.fixity == Fixity::Infix).then_some(info.precedence)
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
    }
}
