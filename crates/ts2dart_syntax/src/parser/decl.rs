/// Declaration parsing methods.
///
/// This chunk parses top-level declarations and class/interface members:
/// - `var` / `let` / `const` statements
/// - `function` declarations (with or without a body)
/// - `class` and `interface` declarations, heritage clauses, and members
/// - parameter lists and type parameter lists
///
/// ## Notes
/// - Accessibility modifiers are recorded on the node but carry no meaning for the parser.
/// - Parameter properties (`constructor(public x)`) are not part of the accepted subset.
impl<'a> Parser<'a> {
    // ========================================================================
    // Modifiers
    // ========================================================================

    /// Parse `export` markers in front of a top-level declaration.
    fn declaration_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        while self.match_keyword(KeywordId::Export) {
            modifiers.push(Modifier::Export);
        }
        modifiers
    }

    /// Parse accessibility and `static` modifiers in front of a class member.
    ///
    /// A modifier word directly followed by something that ends a member name (`(`, `:`, `=`, ...) is the member's
    /// name instead, as in `static() {}`.
    fn member_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        loop {
            let modifier = match self.peek().keyword_id() {
                Some(KeywordId::Public) => Modifier::Public,
                Some(KeywordId::Private) => Modifier::Private,
                Some(KeywordId::Protected) => Modifier::Protected,
                Some(KeywordId::Static) => Modifier::Static,
                _ => break,
            };
            if self.next_ends_member_name() {
                break;
            }
            self.advance();
            modifiers.push(modifier);
        }
        modifiers
    }

    fn next_ends_member_name(&self) -> bool {
        let next = &self.peek_next().kind;
        [
            PunctuationId::LParen,
            PunctuationId::Colon,
            PunctuationId::Semicolon,
            PunctuationId::Comma,
            PunctuationId::Question,
            PunctuationId::RBrace,
        ]
        .iter()
        .any(|p| next.is_punctuation(*p))
            || next.is_operator(OperatorId::Eq)
            || next.is_operator(OperatorId::Lt)
            || matches!(next, TokenKind::Eof)
    }

    // ========================================================================
    // Top-level declarations
    // ========================================================================

    /// Parse the declaration that follows `export`.
    fn exported_declaration(&mut self, start: usize, modifiers: Vec<Modifier>) -> Result<SyntaxNode, CompileError> {
        match self.peek().keyword_id() {
            Some(KeywordId::Var | KeywordId::Let | KeywordId::Const) => self.variable_statement(start, modifiers),
            Some(KeywordId::Function) => self.function_declaration(start, modifiers),
            Some(KeywordId::Class) => self.class_declaration(start, modifiers),
            Some(KeywordId::Interface) => self.interface_declaration(start, modifiers),
            _ => Err(self.unexpected("Expected declaration after 'export'")),
        }
    }

    fn variable_statement(&mut self, start: usize, modifiers: Vec<Modifier>) -> Result<SyntaxNode, CompileError> {
        let keyword = match self.advance().keyword_id() {
            Some(KeywordId::Let) => VariableKeyword::Let,
            Some(KeywordId::Const) => VariableKeyword::Const,
            _ => VariableKeyword::Var,
        };

        let mut declarations = vec![self.variable_declaration()?];
        while self.match_punct(PunctuationId::Comma) {
            declarations.push(self.variable_declaration()?);
        }
        self.consume_semicolon()?;

        Ok(Spanned::new(
            Node::VariableStatement(VariableStatement {
                modifiers,
                keyword,
                declarations,
            }),
            self.span_from(start),
        ))
    }

    fn variable_declaration(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        let name = self.binding_identifier()?;
        let ty = self.optional_type_annotation()?;
        let initializer = self.optional_initializer()?;

        Ok(Spanned::new(
            Node::VariableDeclaration(VariableDeclaration {
                name: Box::new(name),
                ty,
                initializer,
            }),
            self.span_from(start),
        ))
    }

    fn function_declaration(&mut self, start: usize, modifiers: Vec<Modifier>) -> Result<SyntaxNode, CompileError> {
        self.expect_keyword(KeywordId::Function, "Expected 'function'")?;
        let name = self.binding_identifier()?;
        let type_parameters = self.type_parameters()?;
        let parameters = self.parameter_list()?;
        let ty = self.optional_type_annotation()?;
        let body = self.function_body()?;

        Ok(Spanned::new(
            Node::FunctionDeclaration(FunctionDeclaration {
                modifiers,
                name: Box::new(name),
                type_parameters,
                parameters,
                ty,
                body,
            }),
            self.span_from(start),
        ))
    }

    fn class_declaration(&mut self, start: usize, modifiers: Vec<Modifier>) -> Result<SyntaxNode, CompileError> {
        self.expect_keyword(KeywordId::Class, "Expected 'class'")?;
        let name = self.binding_identifier()?;
        let type_parameters = self.type_parameters()?;
        let heritage_clauses = self.heritage_clauses()?;

        self.expect_punct(PunctuationId::LBrace, "Expected '{' after class heading")?;
        let mut members = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            match self.class_member() {
                Ok(member) => members.push(member),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize_member();
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close class body")?;

        Ok(Spanned::new(
            Node::ClassDeclaration(ClassDeclaration {
                modifiers,
                name: Box::new(name),
                type_parameters,
                heritage_clauses,
                members: Some(members),
            }),
            self.span_from(start),
        ))
    }

    fn interface_declaration(&mut self, start: usize, modifiers: Vec<Modifier>) -> Result<SyntaxNode, CompileError> {
        self.expect_keyword(KeywordId::Interface, "Expected 'interface'")?;
        let name = self.binding_identifier()?;
        let type_parameters = self.type_parameters()?;
        let heritage_clauses = self.heritage_clauses()?;

        self.expect_punct(PunctuationId::LBrace, "Expected '{' after interface heading")?;
        let mut members = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            match self.interface_member() {
                Ok(member) => members.push(member),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize_member();
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expected '}' to close interface body")?;

        Ok(Spanned::new(
            Node::InterfaceDeclaration(InterfaceDeclaration {
                modifiers,
                name: Box::new(name),
                type_parameters,
                heritage_clauses,
                members,
            }),
            self.span_from(start),
        ))
    }

    /// Parse any number of `extends` / `implements` clauses.
    ///
    /// Returns `None` when the heading has no heritage clause at all.
    fn heritage_clauses(&mut self) -> Result<Option<Vec<SyntaxNode>>, CompileError> {
        let mut clauses = Vec::new();
        loop {
            let start = self.current_span().start;
            let token = if self.match_keyword(KeywordId::Extends) {
                HeritageToken::Extends
            } else if self.match_keyword(KeywordId::Implements) {
                HeritageToken::Implements
            } else {
                break;
            };

            let mut types = vec![self.type_reference()?];
            while self.match_punct(PunctuationId::Comma) {
                types.push(self.type_reference()?);
            }
            clauses.push(Spanned::new(
                Node::HeritageClause(HeritageClause { token, types }),
                self.span_from(start),
            ));
        }
        Ok((!clauses.is_empty()).then_some(clauses))
    }

    // ========================================================================
    // Members
    // ========================================================================

    fn class_member(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        let modifiers = self.member_modifiers();

        if self.check_keyword(KeywordId::Constructor) && self.peek_next().kind.is_punctuation(PunctuationId::LParen) {
            self.advance();
            let parameters = self.parameter_list()?;
            let body = self.function_body()?;
            return Ok(Spanned::new(
                Node::Constructor(ConstructorDeclaration {
                    modifiers,
                    parameters,
                    body,
                }),
                self.span_from(start),
            ));
        }

        let name = self.property_name()?;
        let optional = self.match_punct(PunctuationId::Question);

        if self.check_punct(PunctuationId::LParen) || self.check_op(OperatorId::Lt) {
            let type_parameters = self.type_parameters()?;
            let parameters = self.parameter_list()?;
            let ty = self.optional_type_annotation()?;
            let body = self.function_body()?;
            return Ok(Spanned::new(
                Node::Method(MethodDeclaration {
                    modifiers,
                    name: Box::new(name),
                    optional,
                    type_parameters,
                    parameters,
                    ty,
                    body,
                }),
                self.span_from(start),
            ));
        }

        let ty = self.optional_type_annotation()?;
        let initializer = self.optional_initializer()?;
        self.consume_semicolon()?;

        Ok(Spanned::new(
            Node::Property(PropertyDeclaration {
                modifiers,
                name: Box::new(name),
                optional,
                ty,
                initializer,
            }),
            self.span_from(start),
        ))
    }

    /// Parse a property or method signature inside an interface body.
    fn interface_member(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        let name = self.property_name()?;
        let optional = self.match_punct(PunctuationId::Question);

        let node = if self.check_punct(PunctuationId::LParen) || self.check_op(OperatorId::Lt) {
            let type_parameters = self.type_parameters()?;
            let parameters = self.parameter_list()?;
            let ty = self.optional_type_annotation()?;
            Node::Method(MethodDeclaration {
                modifiers: Vec::new(),
                name: Box::new(name),
                optional,
                type_parameters,
                parameters,
                ty,
                body: None,
            })
        } else {
            let ty = self.optional_type_annotation()?;
            Node::Property(PropertyDeclaration {
                modifiers: Vec::new(),
                name: Box::new(name),
                optional,
                ty,
                initializer: None,
            })
        };
        let span = self.span_from(start);

        // Signatures are separated by `;`, `,`, or a line break.
        if !self.match_punct(PunctuationId::Semicolon) && !self.match_punct(PunctuationId::Comma) {
            self.consume_semicolon()?;
        }
        Ok(Spanned::new(node, span))
    }

    /// Parse a `{ ... }` body, or the `;` that ends a body-less signature.
    fn function_body(&mut self) -> Result<Option<Box<SyntaxNode>>, CompileError> {
        if self.check_punct(PunctuationId::LBrace) {
            Ok(Some(Box::new(self.block()?)))
        } else {
            self.consume_semicolon()?;
            Ok(None)
        }
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    fn parameter_list(&mut self) -> Result<Vec<SyntaxNode>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;
        let mut parameters = Vec::new();
        while !self.check_punct(PunctuationId::RParen) {
            parameters.push(self.parameter()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;
        Ok(parameters)
    }

    fn parameter(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        let dot_dot_dot = if self.match_punct(PunctuationId::Ellipsis) {
            Some(self.previous().span)
        } else {
            None
        };
        let name = self.binding_identifier()?;
        let optional = self.match_punct(PunctuationId::Question);
        let ty = self.optional_type_annotation()?;
        let initializer = self.optional_initializer()?;

        Ok(Spanned::new(
            Node::Parameter(Parameter {
                dot_dot_dot,
                name: Box::new(name),
                optional,
                ty,
                initializer,
            }),
            self.span_from(start),
        ))
    }

    /// Parse `<T, U extends C>` if present.
    fn type_parameters(&mut self) -> Result<Option<Vec<SyntaxNode>>, CompileError> {
        if !self.match_op(OperatorId::Lt) {
            return Ok(None);
        }

        let mut parameters = Vec::new();
        loop {
            let start = self.current_span().start;
            let name = self.binding_identifier()?;
            let constraint = if self.match_keyword(KeywordId::Extends) {
                Some(Box::new(self.type_node()?))
            } else {
                None
            };
            parameters.push(Spanned::new(
                Node::TypeParameter(TypeParameter {
                    name: Box::new(name),
                    constraint,
                }),
                self.span_from(start),
            ));
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_op(OperatorId::Gt, "Expected '>' after type parameters")?;
        Ok(Some(parameters))
    }

    fn optional_initializer(&mut self) -> Result<Option<Box<SyntaxNode>>, CompileError> {
        if self.match_op(OperatorId::Eq) {
            Ok(Some(Box::new(self.assignment()?)))
        } else {
            Ok(None)
        }
    }
}
