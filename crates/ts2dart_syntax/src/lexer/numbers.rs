//! Numeric literal scanning.
//!
//! Numbers are kept as raw source text so that `1.23e-4` is re-emitted exactly as written.

use super::{Lexer, TokenKind, is_ident_start};

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first character (`first`, a digit or `.`) has been consumed.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        if first == '0' {
            let radix = match self.peek() {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.advance();
                if self.digits(radix) == 0 {
                    self.error("Expected digits after radix prefix", start);
                    return;
                }
                self.finish_number(start);
                return;
            }
        }

        if first != '.' {
            self.digits(10);
            if self.peek() == Some('.') {
                self.advance();
                self.digits(10);
            }
        } else {
            self.digits(10);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let has_sign = matches!(self.peek_next(), Some('+' | '-'));
            let exponent_follows = if has_sign {
                let mut rest = self.source[self.current_pos..].chars().skip(2);
                rest.next().is_some_and(|c| c.is_ascii_digit())
            } else {
                self.peek_next().is_some_and(|c| c.is_ascii_digit())
            };
            if exponent_follows {
                self.advance();
                if has_sign {
                    self.advance();
                }
                self.digits(10);
            } else {
                self.advance();
                self.error("Expected exponent digits", start);
                return;
            }
        }

        self.finish_number(start);
    }

    /// Consume digits of the given radix, returning how many were read.
    fn digits(&mut self, radix: u32) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if c.is_digit(radix) {
                self.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    fn finish_number(&mut self, start: usize) {
        if self.peek().is_some_and(is_ident_start) {
            // `3in`, `0x1g`: an identifier may not start right after a number.
            self.advance();
            self.error("Identifier starts immediately after numeric literal", start);
            return;
        }
        let raw = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Number(raw), start);
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex;
    use super::*;

    fn raw_numbers(source: &str) -> Vec<String> {
        lex(source)
            .unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs))
            .into_iter()
            .filter_map(|t| match t.kind {
                TokenKind::Number(raw) => Some(raw),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_decimal_forms_keep_raw_text() {
        assert_eq!(
            raw_numbers("1234 12.34 1.23e-4 5E+10 .5 1."),
            vec!["1234", "12.34", "1.23e-4", "5E+10", ".5", "1."]
        );
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(raw_numbers("0xFF 0o17 0b101"), vec!["0xFF", "0o17", "0b101"]);
    }

    #[test]
    fn test_member_access_on_number_is_not_a_fraction() {
        let tokens = lex("1..toString").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Number(s) if s == "1."));
    }

    #[test]
    fn test_bad_numbers() {
        assert!(lex("0x").unwrap_err()[0].message.contains("Expected digits"));
        assert!(lex("1e").unwrap_err()[0].message.contains("Expected exponent"));
        assert!(lex("3in").unwrap_err()[0].message.contains("Identifier starts immediately"));
    }
}
