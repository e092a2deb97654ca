/// Miscellaneous parser utilities.
///
/// This chunk contains identifier parsing shared by declarations, types, and expressions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Parse an identifier in binding or reference position.
    ///
    /// Contextual keywords (`constructor`, `number`, `public`, ...) are accepted as plain names.
    fn binding_identifier(&mut self) -> Result<SyntaxNode, CompileError> {
        let span = self.current_span();
        match self.peek().kind.identifier_name() {
            Some(name) => {
                let name = name.to_string();
                self.advance();
                Ok(Spanned::new(Node::Identifier(name), span))
            }
            None => Err(self.unexpected("Expected identifier")),
        }
    }

    /// Parse a member name after `.` or inside a class/interface body.
    ///
    /// Any keyword is allowed here (`x.delete`, `class X { default() {} }`).
    fn property_name(&mut self) -> Result<SyntaxNode, CompileError> {
        let span = self.current_span();
        let name = match &self.peek().kind {
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            TokenKind::Ident(name) => name.clone(),
            _ => return Err(self.unexpected("Expected property name")),
        };
        self.advance();
        Ok(Spanned::new(Node::Identifier(name), span))
    }
}
