//! Lexer for the TypeScript subset
//!
//! Handles tokenization including:
//! - Keywords (reserved and contextual) and identifiers
//! - Numeric, string, and regular-expression literals
//! - Operators and punctuation (`===`, `=>`, `...`, etc.)
//! - Line and block comments
//!
//! Line terminators are not tokens. Instead each [`Token`] records whether a line break preceded it, which is what
//! the parser needs for automatic semicolon insertion.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String, template, and regular-expression scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use ts2dart_core::lang::keywords::{self, KeywordId};
use ts2dart_core::lang::operators::OperatorId;
use ts2dart_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// A `/` is ambiguous: it starts a regular expression where an operand is
// expected and is division after something that ends an operand.
//
//   a / b      → `a` ends an operand     → Operator(Slash)
//   x = /re/   → `=` expects an operand  → Regex("/re/")
// ============================================================================

/// Lexer for TypeScript source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords and identifiers
/// - Numeric, string, and regular-expression literals
/// - Operators and punctuation
/// - Comments and whitespace (skipped, but line breaks are remembered)
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// A line terminator was skipped since the last emitted token.
    saw_newline: bool,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            saw_newline: false,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        let newline_before = self.saw_newline;
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(self.current_pos, self.current_pos),
            newline_before,
        });

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn error(&mut self, message: impl Into<String>, start: usize) {
        self.errors
            .push(CompileError::new(message.into(), Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Line terminators
            _ if is_line_terminator(c) => self.saw_newline = true,

            // Other whitespace (including the byte-order mark)
            _ if c.is_whitespace() || c == '\u{feff}' => {}

            // Operators and punctuation
            '+' => self.operator(
                start,
                OperatorId::Plus,
                &[('+', OperatorId::PlusPlus), ('=', OperatorId::PlusEq)],
            ),
            '-' => self.operator(
                start,
                OperatorId::Minus,
                &[('-', OperatorId::MinusMinus), ('=', OperatorId::MinusEq)],
            ),
            '*' => self.operator(start, OperatorId::Star, &[('=', OperatorId::StarEq)]),
            '/' => self.scan_slash(start),
            '%' => self.operator(start, OperatorId::Percent, &[('=', OperatorId::PercentEq)]),
            '<' => self.operator(start, OperatorId::Lt, &[('=', OperatorId::LtEq)]),
            '>' => self.operator(start, OperatorId::Gt, &[('=', OperatorId::GtEq)]),
            '=' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        self.add_op(OperatorId::EqEqEq, start);
                    } else {
                        self.add_op(OperatorId::EqEq, start);
                    }
                } else if self.match_char('>') {
                    self.add_punct(PunctuationId::FatArrow, start);
                } else {
                    self.add_op(OperatorId::Eq, start);
                }
            }
            '!' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        self.add_op(OperatorId::NotEqEq, start);
                    } else {
                        self.add_op(OperatorId::NotEq, start);
                    }
                } else {
                    self.add_op(OperatorId::Bang, start);
                }
            }
            '&' => {
                if self.match_char('&') {
                    self.add_op(OperatorId::AndAnd, start);
                } else {
                    self.error("Unexpected character '&'", start);
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.add_op(OperatorId::OrOr, start);
                } else {
                    self.error("Unexpected character '|'", start);
                }
            }
            '?' => self.add_punct(PunctuationId::Question, start),
            ',' => self.add_punct(PunctuationId::Comma, start),
            ':' => self.add_punct(PunctuationId::Colon, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number(start, c);
                } else if self.peek() == Some('.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    self.add_punct(PunctuationId::Ellipsis, start);
                } else {
                    self.add_punct(PunctuationId::Dot, start);
                }
            }

            // Strings
            '"' | '\'' => self.scan_string(start, c),
            '`' => self.scan_template(start),

            // Numbers
            '0'..='9' => self.scan_number(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => self.error(format!("Unexpected character '{}'", c), start),
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let newline_before = std::mem::take(&mut self.saw_newline);
        self.tokens.push(Token {
            kind,
            span: Span::new(start, self.current_pos),
            newline_before,
        });
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    /// Try to match compound operator, fallback to simple.
    fn operator(&mut self, start: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start);
                return;
            }
        }
        self.add_op(simple, start);
    }

    /// Scan everything that begins with `/`: comments, regular expressions, `/` and `/=`.
    fn scan_slash(&mut self, start: usize) {
        if self.match_char('/') {
            self.skip_line_comment();
        } else if self.match_char('*') {
            self.skip_block_comment(start);
        } else if self.regex_allowed() {
            self.scan_regex(start);
        } else if self.match_char('=') {
            self.add_op(OperatorId::SlashEq, start);
        } else {
            self.add_op(OperatorId::Slash, start);
        }
    }

    /// Whether a `/` at this point starts a regular expression literal.
    ///
    /// Division is only possible right after a token that can end an operand.
    fn regex_allowed(&self) -> bool {
        let Some(prev) = self.tokens.last() else {
            return true;
        };
        match &prev.kind {
            TokenKind::Ident(_) | TokenKind::Number(_) | TokenKind::String(_) | TokenKind::Regex(_) => false,
            TokenKind::Keyword(id) => {
                let ends_operand = matches!(
                    id,
                    KeywordId::This | KeywordId::Super | KeywordId::True | KeywordId::False | KeywordId::Null
                );
                // Contextual keywords (`number`, `constructor`, ...) may be plain variable names.
                !ends_operand && keywords::is_reserved(*id)
            }
            TokenKind::Punctuation(id) => !matches!(
                id,
                PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace
            ),
            TokenKind::Operator(id) => !matches!(id, OperatorId::PlusPlus | OperatorId::MinusMinus),
            TokenKind::Eof => true,
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if is_line_terminator(c) {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(c) if is_line_terminator(c) => self.saw_newline = true,
                Some(_) => {}
                None => {
                    self.error("Unterminated block comment", start);
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            let name = spelling.to_string();
            self.add_token(TokenKind::Ident(name), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs))
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_punctuation_registry_parity() {
        use ts2dart_core::lang::punctuation;

        for p in punctuation::PUNCTUATION {
            let tokens = kinds(p.canonical);
            assert_eq!(tokens.len(), 2, "expected token + EOF for {:?}, got {:?}", p.canonical, tokens);
            assert!(tokens[0].is_punctuation(p.id), "{:?} lexed as {:?}", p.canonical, tokens[0]);
        }
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = kinds(k.canonical);
            assert_eq!(tokens.len(), 2, "expected token + EOF for keyword {:?}, got {:?}", k.id, tokens);
            assert!(tokens[0].is_keyword(k.id));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        use ts2dart_core::lang::operators;

        for o in operators::OPERATORS {
            // A leading `/` would start a regex; lex operators after an operand.
            let source = format!("a {}", o.spelling);
            let tokens = kinds(&source);
            assert_eq!(tokens.len(), 3, "expected ident + operator + EOF for {:?}, got {:?}", o.spelling, tokens);
            assert!(tokens[1].is_operator(o.id), "{:?} lexed as {:?}", o.spelling, tokens[1]);
        }
    }

    #[test]
    fn test_longest_match_operators() {
        let tokens = kinds("a === b !== c == d != e");
        assert!(tokens[1].is_operator(OperatorId::EqEqEq));
        assert!(tokens[3].is_operator(OperatorId::NotEqEq));
        assert!(tokens[5].is_operator(OperatorId::EqEq));
        assert!(tokens[7].is_operator(OperatorId::NotEq));

        let tokens = kinds("x++ + ++y");
        assert!(tokens[1].is_operator(OperatorId::PlusPlus));
        assert!(tokens[2].is_operator(OperatorId::Plus));
        assert!(tokens[3].is_operator(OperatorId::PlusPlus));
    }

    #[test]
    fn test_contextual_keywords_lex_as_keywords() {
        let tokens = kinds("constructor number");
        assert!(tokens[0].is_keyword(KeywordId::Constructor));
        assert!(tokens[1].is_keyword(KeywordId::Number));
    }

    #[test]
    fn test_identifiers_allow_dollar_and_unicode() {
        let tokens = kinds("$el _x π");
        assert!(matches!(&tokens[0], TokenKind::Ident(s) if s == "$el"));
        assert!(matches!(&tokens[1], TokenKind::Ident(s) if s == "_x"));
        assert!(matches!(&tokens[2], TokenKind::Ident(s) if s == "π"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = kinds("a // line\n/* block */ b");
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0], TokenKind::Ident(s) if s == "a"));
        assert!(matches!(&tokens[1], TokenKind::Ident(s) if s == "b"));
    }

    #[test]
    fn test_newline_before_is_recorded() {
        let tokens = lex("a\nb c /*\n*/ d").unwrap();
        assert!(!tokens[0].newline_before);
        assert!(tokens[1].newline_before);
        assert!(!tokens[2].newline_before);
        assert!(tokens[3].newline_before);
    }

    #[test]
    fn test_regex_versus_division() {
        let tokens = kinds("a / b");
        assert!(tokens[1].is_operator(OperatorId::Slash));

        let tokens = kinds("x = /wo\\/t?/g");
        assert!(matches!(&tokens[2], TokenKind::Regex(s) if s == "/wo\\/t?/g"));

        let tokens = kinds("/[/]/");
        assert!(matches!(&tokens[0], TokenKind::Regex(s) if s == "/[/]/"));

        let tokens = kinds("(a) / 2");
        assert!(tokens[3].is_operator(OperatorId::Slash));

        let tokens = kinds("number / 2");
        assert!(tokens[1].is_operator(OperatorId::Slash));
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = lex("var  abc").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].span, Span::new(5, 8));
        assert_eq!(tokens[2].span, Span::new(8, 8));
    }

    #[test]
    fn test_unexpected_character() {
        let errors = lex("a # b").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unexpected character '#'"));
        assert_eq!(errors[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let errors = lex("a /* never closed").unwrap_err();
        assert!(errors[0].message.contains("Unterminated block comment"));
    }
}
