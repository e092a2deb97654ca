//! Declaration and member emission.
//!
//! Variables, functions, classes (with heritage clauses and members), constructors, and parameters.
//! Declaration modifiers (`export`, `public`, `static`, ...) have no emission and are dropped.

use ts2dart_syntax::ast::{
    ClassDeclaration, ConstructorDeclaration, FunctionDeclaration, HeritageClause, HeritageToken, MethodDeclaration,
    Parameter, PropertyDeclaration, Span, SyntaxNode, VariableDeclaration, VariableStatement,
};

use super::{Scope, Translator};
use crate::backend::errors::TranslateError;
use crate::backend::output::OutputBuffer;

/// Shared shape of functions, methods, and constructors.
struct FunctionLike<'a> {
    type_parameters: Option<&'a [SyntaxNode]>,
    parameters: &'a [SyntaxNode],
    body: Option<&'a SyntaxNode>,
}

impl<'a> Translator<'a> {
    // ========================================================================
    // Variables
    // ========================================================================

    /// Each declaration becomes its own Dart statement.
    pub(super) fn visit_variable_statement(
        &self,
        stmt: &'a VariableStatement,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        for declaration in &stmt.declarations {
            self.visit(declaration, scope, out)?;
            out.emit(";\n");
        }
        Ok(())
    }

    pub(super) fn visit_variable_declaration(
        &self,
        decl: &'a VariableDeclaration,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit_type_or_var(decl.ty.as_deref(), scope, out)?;
        self.visit(&decl.name, scope, out)?;
        self.visit_initializer(decl.initializer.as_deref(), scope, out)
    }

    // ========================================================================
    // Functions
    // ========================================================================

    pub(super) fn visit_function_declaration(
        &self,
        func: &'a FunctionDeclaration,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        if let Some(ty) = func.ty.as_deref() {
            self.visit(ty, scope, out)?;
        }
        self.visit(&func.name, scope, out)?;
        self.visit_function_like(
            FunctionLike {
                type_parameters: func.type_parameters.as_deref(),
                parameters: &func.parameters,
                body: func.body.as_deref(),
            },
            scope,
            out,
        )
    }

    /// Emit `[< T >] ( params ) body`, or `;` in place of a missing body.
    fn visit_function_like(
        &self,
        func: FunctionLike<'a>,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit_type_parameters(func.type_parameters, scope, out)?;
        out.emit("(");
        self.visit_list(func.parameters, scope, out)?;
        out.emit(")");
        match func.body {
            Some(body) => self.visit(body, scope, out),
            None => {
                out.emit(";");
                Ok(())
            }
        }
    }

    /// Emit `[ '[' ] [type] name [= default ']']`.
    ///
    /// Rest parameters are rejected before anything of the parameter is emitted.
    pub(super) fn visit_parameter(
        &self,
        param: &'a Parameter,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        if let Some(span) = param.dot_dot_dot {
            return Err(self
                .error(span, "rest parameters are unsupported")
                .with_help("take a single array parameter instead"));
        }

        if param.initializer.is_some() {
            out.emit("[");
        }
        if let Some(ty) = param.ty.as_deref() {
            self.visit(ty, scope, out)?;
        }
        self.visit(&param.name, scope, out)?;
        if let Some(initializer) = param.initializer.as_deref() {
            out.emit("=");
            self.visit(initializer, scope, out)?;
            out.emit("]");
        }
        Ok(())
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub(super) fn visit_class_declaration(
        &self,
        class: &'a ClassDeclaration,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        out.emit("class");
        self.visit(&class.name, scope, out)?;
        self.visit_type_parameters(class.type_parameters.as_deref(), scope, out)?;
        if let Some(clauses) = class.heritage_clauses.as_deref() {
            self.visit_each(clauses, scope, out)?;
        }

        if let Some(members) = class.members.as_deref() {
            out.emit("{\n");
            self.visit_each(members, scope.in_class(&class.name), out)?;
            out.emit("}\n");
        }
        Ok(())
    }

    pub(super) fn visit_heritage_clause(
        &self,
        span: Span,
        clause: &'a HeritageClause,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        if clause.token == HeritageToken::Extends && clause.types.len() != 1 {
            return Err(self.error(span, "extends clause may only name a single class"));
        }
        out.emit(match clause.token {
            HeritageToken::Extends => "extends",
            HeritageToken::Implements => "implements",
        });
        self.visit_list(&clause.types, scope, out)
    }

    /// Emit `ClassName ( params ) body`, naming the constructor after the enclosing class.
    pub(super) fn visit_constructor(
        &self,
        span: Span,
        ctor: &'a ConstructorDeclaration,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        let Some(class_name) = scope.class_name else {
            return Err(self.error(span, "cannot find outer class node"));
        };
        self.visit(class_name, scope, out)?;
        self.visit_function_like(
            FunctionLike {
                type_parameters: None,
                parameters: &ctor.parameters,
                body: ctor.body.as_deref(),
            },
            scope,
            out,
        )
    }

    pub(super) fn visit_property(
        &self,
        prop: &'a PropertyDeclaration,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit_type_or_var(prop.ty.as_deref(), scope, out)?;
        self.visit(&prop.name, scope, out)?;
        self.visit_initializer(prop.initializer.as_deref(), scope, out)?;
        out.emit(";");
        Ok(())
    }

    pub(super) fn visit_method(
        &self,
        method: &'a MethodDeclaration,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        if let Some(ty) = method.ty.as_deref() {
            self.visit(ty, scope, out)?;
        }
        self.visit(&method.name, scope, out)?;
        self.visit_function_like(
            FunctionLike {
                type_parameters: method.type_parameters.as_deref(),
                parameters: &method.parameters,
                body: method.body.as_deref(),
            },
            scope,
            out,
        )
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Emit the annotated type, or `var` when there is none.
    fn visit_type_or_var(
        &self,
        ty: Option<&'a SyntaxNode>,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        match ty {
            Some(ty) => self.visit(ty, scope, out),
            None => {
                out.emit("var");
                Ok(())
            }
        }
    }

    fn visit_initializer(
        &self,
        initializer: Option<&'a SyntaxNode>,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        if let Some(initializer) = initializer {
            out.emit("=");
            self.visit(initializer, scope, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::tests::{translate_err, translate_ok};
    use super::*;
    use ts2dart_syntax::ast::{Node, SourceFile, Spanned};

    #[test]
    fn variables() {
        assert_eq!(translate_ok("var a: number = 1;"), " num a = 1 ;\n");
        assert_eq!(translate_ok("var a: number;"), " num a ;\n");
        assert_eq!(translate_ok("let s = 'x';"), " var s = \"x\" ;\n");
        assert_eq!(translate_ok("var a: number, b = 2;"), " num a ;\n var b = 2 ;\n");
        assert_eq!(translate_ok("export const c: Foo = null;"), " Foo c = null ;\n");
    }

    #[test]
    fn functions() {
        assert_eq!(translate_ok("function x(a = 42) { return 42; }"), " x ( [ a = 42 ] ) { return 42 ; }");
        assert_eq!(translate_ok("function x(): void {}"), " void x ( ) { }");
        assert_eq!(translate_ok("function x(a: number, b: string);"), " x ( num a , String b ) ;");
        assert_eq!(translate_ok("function id<T>(a: T): T { return a; }"), " T id < T > ( T a ) { return a ; }");
    }

    #[test]
    fn optional_parameters_are_not_bracketed() {
        assert_eq!(translate_ok("function x(a?: number) {}"), " x ( num a ) { }");
    }

    #[test]
    fn rest_parameters_fail() {
        assert_eq!(translate_err("function x(...a) {}"), "test.ts:1:12: rest parameters are unsupported");
    }

    #[test]
    fn classes() {
        assert_eq!(translate_ok("class X {}"), " class X {\n }\n");
        assert_eq!(translate_ok("class X implements Y, Z {}"), " class X implements Y , Z {\n }\n");
        assert_eq!(
            translate_ok("class X extends Y implements Z {}"),
            " class X extends Y implements Z {\n }\n"
        );
        assert_eq!(translate_ok("class X<T extends Y> {}"), " class X < T extends Y > {\n }\n");
    }

    #[test]
    fn class_members() {
        assert_eq!(translate_ok("class X { x: number; }"), " class X {\n num x ; }\n");
        assert_eq!(translate_ok("class X { x: number = 42; }"), " class X {\n num x = 42 ; }\n");
        assert_eq!(translate_ok("class X { x; }"), " class X {\n var x ; }\n");
        assert_eq!(translate_ok("class X { x() { return 42; } }"), " class X {\n x ( ) { return 42 ; } }\n");
        assert_eq!(
            translate_ok("class X { x(): number { return 42; } }"),
            " class X {\n num x ( ) { return 42 ; } }\n"
        );
        assert_eq!(
            translate_ok("class X { x(a, b) { return 42; } }"),
            " class X {\n x ( a , b ) { return 42 ; } }\n"
        );
        assert_eq!(
            translate_ok("class X { private static x(a: number, b: string) { return 42; } }"),
            " class X {\n x ( num a , String b ) { return 42 ; } }\n"
        );
        assert_eq!(translate_ok("class X { constructor() {} }"), " class X {\n X ( ) { } }\n");
    }

    #[test]
    fn extends_with_two_targets_fails() {
        // The parser accepts a target list; Dart has single inheritance.
        assert_eq!(
            translate_err("class X extends Y, Z {}"),
            "test.ts:1:9: extends clause may only name a single class"
        );
    }

    #[test]
    fn constructor_outside_class_fails() {
        let ctor = Spanned::new(
            Node::Constructor(ConstructorDeclaration {
                modifiers: Vec::new(),
                parameters: Vec::new(),
                body: None,
            }),
            Span::new(2, 15),
        );
        let file = SourceFile::new("loose.ts", "  constructor();", vec![ctor]);
        let mut out = OutputBuffer::new();
        let err = Translator::new(&file).translate_file(&mut out).unwrap_err();
        assert_eq!(err.to_string(), "loose.ts:1:3: cannot find outer class node");
        assert!(out.is_empty());
    }
}
