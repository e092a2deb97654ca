/// Type annotation parsing.
///
/// Supported forms:
/// - primitive keywords (`number`, `string`, `void`, `boolean`, `any`)
/// - named references with optional type arguments (`Foo`, `Map<K, V>`)
/// - array suffixes (`number[]`, `Foo<T>[][]`)
///
/// Union, intersection, function, and object-literal types are outside the accepted subset.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Parse `: Type` if present.
    fn optional_type_annotation(&mut self) -> Result<Option<Box<SyntaxNode>>, CompileError> {
        if self.match_punct(PunctuationId::Colon) {
            Ok(Some(Box::new(self.type_node()?)))
        } else {
            Ok(None)
        }
    }

    fn type_node(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        let mut ty = self.primary_type()?;

        while self.check_punct(PunctuationId::LBracket) && self.peek_next().kind.is_punctuation(PunctuationId::RBracket)
        {
            self.advance();
            self.advance();
            ty = Spanned::new(Node::ArrayType(Box::new(ty)), self.span_from(start));
        }

        Ok(ty)
    }

    fn primary_type(&mut self) -> Result<SyntaxNode, CompileError> {
        if let Some(primitive) = self.peek().keyword_id().and_then(types::from_keyword) {
            let span = self.advance().span;
            return Ok(Spanned::new(Node::PrimitiveType(primitive), span));
        }
        self.type_reference()
    }

    /// Parse a named type with optional `<...>` arguments.
    fn type_reference(&mut self) -> Result<SyntaxNode, CompileError> {
        let start = self.current_span().start;
        if self.peek().kind.identifier_name().is_none() {
            return Err(self.unexpected("Expected type"));
        }
        let type_name = self.binding_identifier()?;

        let type_arguments = if self.match_op(OperatorId::Lt) {
            let mut arguments = vec![self.type_node()?];
            while self.match_punct(PunctuationId::Comma) {
                arguments.push(self.type_node()?);
            }
            self.expect_op(OperatorId::Gt, "Expected '>' after type arguments")?;
            Some(arguments)
        } else {
            None
        };

        Ok(Spanned::new(
            Node::TypeReference(TypeReference {
                type_name: Box::new(type_name),
                type_arguments,
            }),
            self.span_from(start),
        ))
    }
}
