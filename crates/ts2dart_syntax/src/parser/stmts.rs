/// Statement parsing methods.
///
/// This chunk dispatches on the leading token of a statement and parses blocks, `return`, `if`, `while`, empty
/// statements, and expression statements. Declarations are delegated to the `decl` chunk.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;

        if self.check_keyword(KeywordId::Export) {
            let modifiers = self.declaration_modifiers();
            return self.exported_declaration(start, modifiers);
        }

        match self.peek().keyword_id() {
            Some(KeywordId::Var | KeywordId::Let | KeywordId::Const) => self.variable_statement(start, Vec::new()),
            Some(KeywordId::Function) => self.function_declaration(start, Vec::new()),
            Some(KeywordId::Class) => self.class_declaration(start, Vec::new()),
            Some(KeywordId::Interface) => self.interface_declaration(start, Vec::new()),
            Some(KeywordId::Return) => self.return_statement(),
            Some(KeywordId::If) => self.if_statement(),
            Some(KeywordId::While) => self.while_statement(),
            _ if self.check_punct(PunctuationId::LBrace) => self.block(),
            _ if self.check_punct(PunctuationId::Semicolon) => {
                self.advance();
                Ok(Spanned::new(Node::EmptyStatement, self.span_from(start)))
            }
            _ => self.expression_statement(),
        }
    }

    fn block(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;

        let mut statements = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            statements.push(self.statement()?);
        }
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close block")?;

        Ok(Spanned::new(Node::Block(Block { statements }), self.span_from(start)))
    }

    fn return_statement(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(KeywordId::Return, "Expected 'return'")?;

        // A line break right after `return` ends the statement.
        let ends_here = self.check_punct(PunctuationId::Semicolon)
            || self.check_punct(PunctuationId::RBrace)
            || self.is_at_end()
            || self.peek().newline_before;
        let expression = if ends_here {
            None
        } else {
            Some(Box::new(self.expression()?))
        };
        self.consume_semicolon()?;

        Ok(Spanned::new(Node::ReturnStatement(expression), self.span_from(start)))
    }

    fn if_statement(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(KeywordId::If, "Expected 'if'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'if'")?;
        let expression = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        let then_statement = self.statement()?;
        let else_statement = if self.match_keyword(KeywordId::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Spanned::new(
            Node::IfStatement(IfStatement {
                expression: Box::new(expression),
                then_statement: Box::new(then_statement),
                else_statement,
            }),
            self.span_from(start),
        ))
    }

    fn while_statement(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(KeywordId::While, "Expected 'while'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'while'")?;
        let expression = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        let statement = self.statement()?;

        Ok(Spanned::new(
            Node::WhileStatement(WhileStatement {
                expression: Box::new(expression),
                statement: Box::new(statement),
            }),
            self.span_from(start),
        ))
    }

    fn expression_statement(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        let expression = self.expression()?;
        self.consume_semicolon()?;
        Ok(Spanned::new(
            Node::ExpressionStatement(Box::new(expression)),
            self.span_from(start),
        ))
    }
}
