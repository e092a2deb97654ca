//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use ts2dart_core::lang::keywords::{self, KeywordId};
use ts2dart_core::lang::operators::{self, OperatorId};
use ts2dart_core::lang::punctuation::{self, PunctuationId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the spelling usable as an identifier: plain identifiers and contextual keywords.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            TokenKind::Keyword(id) if !keywords::is_reserved(*id) => Some(keywords::as_str(*id)),
            _ => None,
        }
    }

    /// Short human-readable description used in "expected X, found Y" diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Number(raw) => format!("number {raw}"),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Regex(_) => "regular expression".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contextual_keywords_are_identifier_names() {
        assert_eq!(TokenKind::Keyword(KeywordId::Constructor).identifier_name(), Some("constructor"));
        assert_eq!(TokenKind::Keyword(KeywordId::Class).identifier_name(), None);
        assert_eq!(TokenKind::Ident("x".to_string()).identifier_name(), Some("x"));
    }

    #[test]
    fn describe_uses_registry_spellings() {
        assert_eq!(TokenKind::Operator(OperatorId::EqEqEq).describe(), "'==='");
        assert_eq!(TokenKind::Punctuation(PunctuationId::LBrace).describe(), "'{'");
        assert_eq!(TokenKind::Eof.describe(), "end of file");
    }
}
