/// Parse a token stream into top-level statements.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `ts2dart_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<SyntaxNode>, Vec<CompileError>> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    Parser::new(tokens).parse()
}

/// Lex and parse one file into a [`SourceFile`].
///
/// ## Errors
/// Returns the lexer's errors if tokenization fails, otherwise the parser's errors.
pub fn parse_source_file(file_name: &str, text: &str) -> Result<SourceFile, Vec<CompileError>> {
    let tokens = lexer::lex(text)?;
    let statements = parse(&tokens)?;
    Ok(SourceFile::new(file_name, text, statements))
}
