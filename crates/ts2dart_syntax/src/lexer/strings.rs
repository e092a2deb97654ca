//! String, template, and regular-expression literal scanning.
//!
//! String tokens carry the *decoded* value; regular expressions carry their raw text. Template literals are
//! recognized only so they can be rejected with a precise error.

use super::{Lexer, TokenKind, is_line_terminator};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan a single- or double-quoted string literal. The opening quote has been consumed.
    pub(super) fn scan_string(&mut self, start: usize, quote: char) {
        let mut value = String::new();

        loop {
            let Some(c) = self.peek() else {
                self.error("Unterminated string literal", start);
                return;
            };

            if c == quote {
                self.advance();
                break;
            }
            if c == '\n' || c == '\r' {
                // Leave the newline for the main loop so ASI still sees it.
                self.error("Unterminated string literal", start);
                return;
            }

            self.advance();
            if c == '\\' {
                self.scan_escape(start, &mut value);
            } else {
                value.push(c);
            }
        }

        self.add_token(TokenKind::String(value), start);
    }

    /// Decode one escape sequence. The backslash has been consumed.
    fn scan_escape(&mut self, start: usize, value: &mut String) {
        let Some(c) = self.advance() else {
            self.error("Unterminated string literal", start);
            return;
        };

        match c {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{0008}'),
            'f' => value.push('\u{000C}'),
            'v' => value.push('\u{000B}'),
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => value.push('\0'),
            '0'..='7' => self.error("Octal escape sequences are not allowed", start),
            'x' => match self.hex_digits(2) {
                Some(code) => self.push_code_point(code, start, value),
                None => self.error("Invalid hexadecimal escape sequence", start),
            },
            'u' => match self.unicode_escape() {
                Some(high @ 0xD800..=0xDBFF) if self.peek() == Some('\\') && self.peek_next() == Some('u') => {
                    self.advance();
                    self.advance();
                    match self.unicode_escape() {
                        Some(low @ 0xDC00..=0xDFFF) => {
                            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                            self.push_code_point(code, start, value);
                        }
                        Some(other) => {
                            self.push_code_point(high, start, value);
                            self.push_code_point(other, start, value);
                        }
                        None => self.error("Invalid Unicode escape sequence", start),
                    }
                }
                Some(code) => self.push_code_point(code, start, value),
                None => self.error("Invalid Unicode escape sequence", start),
            },
            // Line continuation
            '\r' => {
                self.match_char('\n');
            }
            _ if is_line_terminator(c) => {}
            // `\\`, `\'`, `\"` and any other character stand for themselves.
            other => value.push(other),
        }
    }

    /// Scan the part of a `\\uXXXX` or `\\u{X...}` escape after the `u`.
    fn unicode_escape(&mut self) -> Option<u32> {
        if self.match_char('{') {
            self.braced_code_point()
        } else {
            self.hex_digits(4)
        }
    }

    fn hex_digits(&mut self, count: usize) -> Option<u32> {
        let mut code = 0u32;
        for _ in 0..count {
            let digit = self.peek()?.to_digit(16)?;
            self.advance();
            code = code * 16 + digit;
        }
        Some(code)
    }

    /// Scan the `XXXX}` part of a `\u{XXXX}` escape.
    fn braced_code_point(&mut self) -> Option<u32> {
        let mut code = 0u32;
        let mut digits = 0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(16)) {
            self.advance();
            code = code.checked_mul(16)?.checked_add(digit)?;
            digits += 1;
        }
        if digits == 0 || !self.match_char('}') {
            return None;
        }
        Some(code)
    }

    fn push_code_point(&mut self, code: u32, start: usize, value: &mut String) {
        match char::from_u32(code) {
            Some(c) => value.push(c),
            // Unpaired surrogates cannot live in a Rust string.
            None => self.error(format!("Unsupported code point U+{code:04X} in string literal"), start),
        }
    }

    /// Reject a template literal, skipping to its closing backtick so lexing can continue.
    pub(super) fn scan_template(&mut self, start: usize) {
        while let Some(c) = self.advance() {
            match c {
                '`' => break,
                '\\' => {
                    self.advance();
                }
                _ if is_line_terminator(c) => self.saw_newline = true,
                _ => {}
            }
        }
        self.errors.push(
            CompileError::new(
                "Template literals are not supported".to_string(),
                Span::new(start, self.current_pos),
            )
            .with_hint("use a quoted string literal instead"),
        );
    }

    /// Scan a regular-expression literal. The opening `/` has been consumed.
    pub(super) fn scan_regex(&mut self, start: usize) {
        let mut in_class = false;

        loop {
            let Some(c) = self.peek() else {
                self.error("Unterminated regular expression literal", start);
                return;
            };
            if is_line_terminator(c) {
                self.error("Unterminated regular expression literal", start);
                return;
            }
            self.advance();

            match c {
                '\\' => {
                    if self.peek().is_some_and(|c| !is_line_terminator(c)) {
                        self.advance();
                    }
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                _ => {}
            }
        }

        // Flags
        while let Some(c) = self.peek() {
            if super::is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let raw = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Regex(raw), start);
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex;
    use super::*;

    fn single_string(source: &str) -> String {
        let tokens = lex(source).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs));
        match &tokens[0].kind {
            TokenKind::String(s) => s.clone(),
            other => panic!("expected string token, got {:?}", other),
        }
    }

    #[test]
    fn test_quotes() {
        assert_eq!(single_string(r#""hello""#), "hello");
        assert_eq!(single_string("'world'"), "world");
        assert_eq!(single_string(r#"'hello\' "world'"#), "hello' \"world");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(single_string(r"'a\nb\tc'"), "a\nb\tc");
        assert_eq!(single_string(r"'\x41B\u{43}'"), "ABC");
        assert_eq!(single_string(r"'\\'"), "\\");
        assert_eq!(single_string(r"'\q'"), "q");
        assert_eq!(single_string("'a\\\nb'"), "ab");
    }

    #[test]
    fn test_unterminated_string() {
        let errors = lex("'abc").unwrap_err();
        assert!(errors[0].message.contains("Unterminated string literal"));

        let errors = lex("'abc\n'").unwrap_err();
        assert!(errors[0].message.contains("Unterminated string literal"));
    }

    #[test]
    fn test_surrogate_pair_escape() {
        assert_eq!(single_string(r"'\uD83D\uDE00'"), "\u{1F600}");
        assert_eq!(single_string(r"'a\uD83D\uDE00b'"), "a\u{1F600}b");
        assert_eq!(single_string(r"'\u{1F600}'"), "\u{1F600}");
    }

    #[test]
    fn test_unpaired_surrogate_rejected() {
        let errors = lex(r"'\uD83D'").unwrap_err();
        assert!(errors[0].message.contains("Unsupported code point U+D83D"));

        let errors = lex(r"'\uD83Dx'").unwrap_err();
        assert!(errors[0].message.contains("U+D83D"));

        let errors = lex(r"'\uDE00'").unwrap_err();
        assert!(errors[0].message.contains("U+DE00"));

        // High surrogate followed by an escape that is not a low surrogate.
        let errors = lex(r"'\uD83D\u0041'").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("U+D83D"));
    }

    #[test]
    fn test_octal_escapes_rejected() {
        assert_eq!(single_string(r"'\0'"), "\0");
        for source in [r"'\01'", r"'\1'", r"'\7'"] {
            let errors = lex(source).unwrap_err();
            assert!(errors[0].message.contains("Octal escape sequences"), "{}", source);
        }
        assert_eq!(single_string(r"'\8'"), "8");
    }

    #[test]
    fn test_bad_escape() {
        let errors = lex(r"'\xZZ'").unwrap_err();
        assert!(errors[0].message.contains("Invalid hexadecimal escape"));
    }

    #[test]
    fn test_template_literal_rejected() {
        let errors = lex("var a = `x${y}`;").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Template literals are not supported"));
        assert_eq!(errors[0].span.start, 8);
    }

    #[test]
    fn test_regex_flags_and_classes() {
        let tokens = lex("/a[/]b/gi").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Regex(s) if s == "/a[/]b/gi"));
    }

    #[test]
    fn test_unterminated_regex() {
        let errors = lex("/abc\n/").unwrap_err();
        assert!(errors[0].message.contains("Unterminated regular expression"));
    }
}
