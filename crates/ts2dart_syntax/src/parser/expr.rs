/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a precedence ladder:
/// assignment → conditional → binary (precedence climbing) → prefix unary → postfix update → call/member →
/// primary.
///
/// ## Notes
/// - Binary precedence and associativity come from the `ts2dart_core::lang::operators` registry, so there is one
///   loop for every infix level instead of one function per level.
/// - Arrow functions, object literals, and template literals are outside the accepted subset.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<SyntaxNode, CompileError> {
        self.assignment()
    }

    /// Parse `target op= value` (right-associative) or fall through to a conditional.
    fn assignment(&mut self) -> Result<SyntaxNode, CompileError> {
        let left = self.conditional()?;

        let Some(op) = self.peek().operator_id().filter(|op| is_assignment_operator(*op)) else {
            return Ok(left);
        };
        self.advance();
        let right = self.assignment()?;
        let span = left.span.merge(right.span);
        Ok(Spanned::new(
            Node::BinaryExpression(BinaryExpression {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            }),
            span,
        ))
    }

    fn conditional(&mut self) -> Result<SyntaxNode, CompileError> {
        let condition = self.binary(0)?;
        if !self.match_punct(PunctuationId::Question) {
            return Ok(condition);
        }

        let when_true = self.assignment()?;
        self.expect_punct(PunctuationId::Colon, "Expected ':' in conditional expression")?;
        let when_false = self.assignment()?;
        let span = condition.span.merge(when_false.span);
        Ok(Spanned::new(
            Node::ConditionalExpression(ConditionalExpression {
                condition: Box::new(condition),
                when_true: Box::new(when_true),
                when_false: Box::new(when_false),
            }),
            span,
        ))
    }

    /// Precedence climbing over the left-associative infix operators.
    fn binary(&mut self, min_precedence: u8) -> Result<SyntaxNode, CompileError> {
        let mut left = self.unary()?;

        loop {
            let Some(op) = self.peek().operator_id() else {
                break;
            };
            if is_assignment_operator(op) {
                break;
            }
            let Some(precedence) = operators::binary_precedence(op) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }

            self.advance();
            let right = self.binary(precedence + 1)?;
            let span = left.span.merge(right.span);
            left = Spanned::new(
                Node::BinaryExpression(BinaryExpression {
                    left: Box::new(left),
                    operator: op,
                    right: Box::new(right),
                }),
                span,
            );
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<SyntaxNode, CompileError> {
        let prefix = self.peek().operator_id().filter(|op| {
            matches!(
                op,
                OperatorId::Bang | OperatorId::Minus | OperatorId::Plus | OperatorId::PlusPlus | OperatorId::MinusMinus
            )
        });
        let Some(operator) = prefix else {
            return self.postfix();
        };

        let start = self.advance().span.start;
        let operand = self.unary()?;
        let span = Span::new(start, operand.span.end);
        Ok(Spanned::new(
            Node::PrefixUnaryExpression(UnaryExpression {
                operator,
                operand: Box::new(operand),
            }),
            span,
        ))
    }

    fn postfix(&mut self) -> Result<SyntaxNode, CompileError> {
        let operand = self.call_expression()?;

        // `a \n ++b` is two statements; a postfix update must stay on the operand's line.
        let update = self
            .peek()
            .operator_id()
            .filter(|op| matches!(op, OperatorId::PlusPlus | OperatorId::MinusMinus));
        match update {
            Some(operator) if !self.peek().newline_before => {
                let end = self.advance().span.end;
                let span = Span::new(operand.span.start, end);
                Ok(Spanned::new(
                    Node::PostfixUnaryExpression(UnaryExpression {
                        operator,
                        operand: Box::new(operand),
                    }),
                    span,
                ))
            }
            _ => Ok(operand),
        }
    }

    fn call_expression(&mut self) -> Result<SyntaxNode, CompileError> {
        let callee = if self.check_keyword(KeywordId::New) {
            self.new_expression()?
        } else {
            self.primary()?
        };
        self.member_suffixes(callee, true)
    }

    /// Parse `new Callee[.member][(args)]`.
    fn new_expression(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(KeywordId::New, "Expected 'new'")?;

        let callee = if self.check_keyword(KeywordId::New) {
            self.new_expression()?
        } else {
            self.primary()?
        };
        let callee = self.member_suffixes(callee, false)?;
        let arguments = if self.check_punct(PunctuationId::LParen) {
            Some(self.arguments()?)
        } else {
            None
        };

        Ok(Spanned::new(
            Node::NewExpression(NewExpression {
                expression: Box::new(callee),
                arguments,
            }),
            self.span_from(start),
        ))
    }

    /// Parse any chain of `.name`, `[index]`, and (when `allow_calls`) `(args)` suffixes.
    fn member_suffixes(&mut self, mut expr: SyntaxNode, allow_calls: bool) -> Result<SyntaxNode, CompileError> {
        loop {
            let start = expr.span.start;
            if self.match_punct(PunctuationId::Dot) {
                let name = self.property_name()?;
                expr = Spanned::new(
                    Node::PropertyAccessExpression(PropertyAccessExpression {
                        expression: Box::new(expr),
                        name: Box::new(name),
                    }),
                    self.span_from(start),
                );
            } else if self.match_punct(PunctuationId::LBracket) {
                let argument = self.expression()?;
                self.expect_punct(PunctuationId::RBracket, "Expected ']' after index")?;
                expr = Spanned::new(
                    Node::ElementAccessExpression(ElementAccessExpression {
                        expression: Box::new(expr),
                        argument: Box::new(argument),
                    }),
                    self.span_from(start),
                );
            } else if allow_calls && self.check_punct(PunctuationId::LParen) {
                let arguments = self.arguments()?;
                expr = Spanned::new(
                    Node::CallExpression(CallExpression {
                        expression: Box::new(expr),
                        arguments,
                    }),
                    self.span_from(start),
                );
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn arguments(&mut self) -> Result<Vec<SyntaxNode>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut arguments = Vec::new();
        while !self.check_punct(PunctuationId::RParen) {
            arguments.push(self.assignment()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after arguments")?;
        Ok(arguments)
    }

    fn primary(&mut self) -> Result<SyntaxNode, CompileError> {
        let span = self.current_span();

        let literal = match &self.peek().kind {
            TokenKind::Number(raw) => Some(Node::NumericLiteral(raw.clone())),
            TokenKind::String(value) => Some(Node::StringLiteral(value.clone())),
            TokenKind::Regex(raw) => Some(Node::RegularExpressionLiteral(raw.clone())),
            TokenKind::Keyword(KeywordId::True) => Some(Node::TrueKeyword),
            TokenKind::Keyword(KeywordId::False) => Some(Node::FalseKeyword),
            TokenKind::Keyword(KeywordId::Null) => Some(Node::NullKeyword),
            TokenKind::Keyword(KeywordId::This) => Some(Node::ThisKeyword),
            _ => None,
        };
        if let Some(node) = literal {
            self.advance();
            return Ok(Spanned::new(node, span));
        }

        if self.match_punct(PunctuationId::LParen) {
            let inner = self.expression()?;
            self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
            return Ok(Spanned::new(
                Node::ParenthesizedExpression(Box::new(inner)),
                self.span_from(span.start),
            ));
        }

        if self.match_punct(PunctuationId::LBracket) {
            let mut elements = Vec::new();
            while !self.check_punct(PunctuationId::RBracket) {
                elements.push(self.assignment()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
            self.expect_punct(PunctuationId::RBracket, "Expected ']' after array elements")?;
            return Ok(Spanned::new(
                Node::ArrayLiteralExpression(elements),
                self.span_from(span.start),
            ));
        }

        if self.peek().kind.identifier_name().is_some() {
            return self.binding_identifier();
        }

        Err(self.unexpected("Expected expression"))
    }
}

/// Return `true` for `=` and the compound assignment operators.
fn is_assignment_operator(op: OperatorId) -> bool {
    let info = operators::info_for(op);
    info.fixity == Fixity::Infix && info.associativity == Associativity::Right
}
