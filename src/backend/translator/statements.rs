//! Statement emission: expression statements, `return`, and blocks.

use ts2dart_syntax::ast::{Block, SyntaxNode};

use super::{Scope, Translator};
use crate::backend::errors::TranslateError;
use crate::backend::output::OutputBuffer;

impl<'a> Translator<'a> {
    pub(super) fn visit_expression_statement(
        &self,
        expr: &'a SyntaxNode,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit(expr, scope, out)?;
        out.emit(";");
        Ok(())
    }

    pub(super) fn visit_return_statement(
        &self,
        expr: Option<&'a SyntaxNode>,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        out.emit("return");
        if let Some(expr) = expr {
            self.visit(expr, scope, out)?;
        }
        out.emit(";");
        Ok(())
    }

    pub(super) fn visit_block(
        &self,
        block: &'a Block,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        out.emit("{");
        self.visit_each(&block.statements, scope, out)?;
        out.emit("}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{translate_err, translate_ok};

    #[test]
    fn return_with_and_without_value() {
        assert_eq!(translate_ok("function f() { return 1; }"), " f ( ) { return 1 ; }");
        assert_eq!(translate_ok("function f() { return; }"), " f ( ) { return ; }");
    }

    #[test]
    fn nested_blocks() {
        assert_eq!(
            translate_ok("function f() { { var a = 1; } }"),
            " f ( ) { { var a = 1 ;\n } }"
        );
    }

    #[test]
    fn unsupported_statement_inside_body_is_located() {
        assert_eq!(
            translate_err("function f() {\n  while (x) {}\n}"),
            "test.ts:2:3: Unsupported node type WhileStatement"
        );
    }
}
