/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Automatic semicolon insertion (`consume_semicolon`)
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Return the most recently consumed token (or the first token if nothing was consumed yet).
    fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    /// Build an "`msg`, found X" error pointing at the current token.
    fn unexpected(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, self.peek().kind.describe()),
            self.current_span(),
        )
    }

    /// Consume a statement terminator.
    ///
    /// An explicit `;` is always accepted. It may be omitted before `}`, at end of file, or when the next token
    /// starts a new line.
    fn consume_semicolon(&mut self) -> Result<(), CompileError> {
        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(());
        }
        if self.check_punct(PunctuationId::RBrace) || self.is_at_end() || self.peek().newline_before {
            return Ok(());
        }
        Err(self.unexpected("Expected ';'"))
    }

    /// Skip tokens until a likely statement boundary.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind.is_punctuation(PunctuationId::Semicolon) {
                return;
            }
            if self.check_keyword(KeywordId::Var)
                || self.check_keyword(KeywordId::Let)
                || self.check_keyword(KeywordId::Const)
                || self.check_keyword(KeywordId::Function)
                || self.check_keyword(KeywordId::Class)
                || self.check_keyword(KeywordId::Interface)
                || self.check_keyword(KeywordId::Export)
                || self.check_keyword(KeywordId::Return)
                || self.check_keyword(KeywordId::If)
                || self.check_keyword(KeywordId::While)
            {
                return;
            }
            self.advance();
        }
    }

    /// Skip the rest of a broken class or interface member: up to and including its `;`,
    /// or up to (not including) the `}` that closes the body.
    fn synchronize_member(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.check_punct(PunctuationId::RBrace) {
                if depth == 0 {
                    return;
                }
                depth -= 1;
            } else if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if depth == 0 && self.check_punct(PunctuationId::Semicolon) {
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span from `start` to the end of the most recently consumed token.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous().span.end.max(start))
    }
}
