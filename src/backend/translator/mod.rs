//! Translate the syntax tree of a [`Program`] into Dart source text.
//!
//! This module defines [`Translator`] and the top-level entry points. The per-construct emission rules live in
//! focused submodules that add methods to the same type:
//!
//! - [`decls`]: variables, functions, classes, members, parameters
//! - [`statements`]: expression/return statements and blocks
//! - [`types`]: primitive keyword rewriting, type references, type parameters
//! - [`literals`]: identifiers and literal tokens
//!
//! ## Notes
//! - The visitor *is* the code generator: there is no intermediate representation between the tree and the
//!   output tokens.
//! - [`Translator::visit`] matches exhaustively over [`Node`]. Kinds without an emission rule are named in a single
//!   arm that reports `Unsupported node type <Kind>`; adding a node variant forces a decision here.
//! - Translation is fail-fast; the first [`TranslateError`] aborts the whole program.

mod decls;
mod literals;
mod statements;
mod types;

use ts2dart_core::lang::keywords::KeywordId;
use ts2dart_syntax::ast::{Node, SourceFile, Span, SyntaxNode};

use super::errors::TranslateError;
use super::output::OutputBuffer;
use crate::config::TranslateConfig;
use crate::frontend::Program;

/// Translate every non-declaration file of `program`, in file order, into one Dart text.
///
/// ## Errors
/// Returns the first [`TranslateError`] encountered; no partial output is returned.
pub fn translate_program(program: &Program) -> Result<String, TranslateError> {
    translate_program_with(program, &TranslateConfig::default())
}

/// Like [`translate_program`], with explicit control over which files are skipped.
#[tracing::instrument(skip_all, fields(files = program.files.len()))]
pub fn translate_program_with(program: &Program, config: &TranslateConfig) -> Result<String, TranslateError> {
    let mut out = OutputBuffer::new();
    for file in &program.files {
        if config.skips(&file.file_name) {
            tracing::debug!(file = %file.file_name, "skipping declaration file");
            continue;
        }
        tracing::debug!(file = %file.file_name, statements = file.statements.len(), "translating");
        Translator::new(file).translate_file(&mut out)?;
    }
    Ok(out.into_string())
}

/// Context threaded down through recursive visits.
///
/// Replaces parent links: a constructor learns the name of its class from here.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Scope<'a> {
    /// Name node of the innermost enclosing class.
    pub class_name: Option<&'a SyntaxNode>,
}

impl<'a> Scope<'a> {
    fn in_class(self, name: &'a SyntaxNode) -> Self {
        Scope { class_name: Some(name) }
    }
}

/// Emit Dart tokens for the nodes of one source file.
pub struct Translator<'a> {
    file: &'a SourceFile,
}

impl<'a> Translator<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self { file }
    }

    /// Visit the file's top-level statements in source order.
    pub fn translate_file(&self, out: &mut OutputBuffer) -> Result<(), TranslateError> {
        let scope = Scope::default();
        self.file
            .statements
            .iter()
            .try_for_each(|statement| self.visit(statement, scope, out))
    }

    /// Dispatch on the node's kind and apply exactly one emission rule.
    pub(crate) fn visit(
        &self,
        node: &'a SyntaxNode,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        match &node.node {
            // Declarations / members
            Node::VariableStatement(stmt) => self.visit_variable_statement(stmt, scope, out),
            Node::VariableDeclaration(decl) => self.visit_variable_declaration(decl, scope, out),
            Node::FunctionDeclaration(func) => self.visit_function_declaration(func, scope, out),
            Node::ClassDeclaration(class) => self.visit_class_declaration(class, scope, out),
            Node::HeritageClause(clause) => self.visit_heritage_clause(node.span, clause, scope, out),
            Node::TypeParameter(param) => self.visit_type_parameter(param, scope, out),
            Node::Constructor(ctor) => self.visit_constructor(node.span, ctor, scope, out),
            Node::Property(prop) => self.visit_property(prop, scope, out),
            Node::Method(method) => self.visit_method(method, scope, out),
            Node::Parameter(param) => self.visit_parameter(param, scope, out),

            // Statements
            Node::Block(block) => self.visit_block(block, scope, out),
            Node::ExpressionStatement(expr) => self.visit_expression_statement(expr, scope, out),
            Node::ReturnStatement(expr) => self.visit_return_statement(expr.as_deref(), scope, out),

            // Literals
            Node::Identifier(name) => self.visit_identifier(name, out),
            Node::NumericLiteral(raw) | Node::RegularExpressionLiteral(raw) => self.visit_raw_literal(raw, out),
            Node::StringLiteral(value) => self.visit_string_literal(value, out),
            Node::TrueKeyword => self.visit_keyword_literal(KeywordId::True, out),
            Node::FalseKeyword => self.visit_keyword_literal(KeywordId::False, out),
            Node::NullKeyword => self.visit_keyword_literal(KeywordId::Null, out),

            // Types
            Node::PrimitiveType(id) => self.visit_primitive_type(node, *id, out),
            Node::TypeReference(reference) => self.visit_type_reference(reference, scope, out),

            Node::InterfaceDeclaration(_)
            | Node::IfStatement(_)
            | Node::WhileStatement(_)
            | Node::EmptyStatement
            | Node::ThisKeyword
            | Node::BinaryExpression(_)
            | Node::PrefixUnaryExpression(_)
            | Node::PostfixUnaryExpression(_)
            | Node::CallExpression(_)
            | Node::NewExpression(_)
            | Node::PropertyAccessExpression(_)
            | Node::ElementAccessExpression(_)
            | Node::ParenthesizedExpression(_)
            | Node::ArrayLiteralExpression(_)
            | Node::ConditionalExpression(_)
            | Node::ArrayType(_) => Err(self.unsupported_node(node)),
        }
    }

    /// Visit `nodes` separated by `,` tokens.
    fn visit_list(
        &self,
        nodes: &'a [SyntaxNode],
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.emit(",");
            }
            self.visit(node, scope, out)?;
        }
        Ok(())
    }

    /// Visit `nodes` back to back.
    fn visit_each(
        &self,
        nodes: &'a [SyntaxNode],
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        nodes.iter().try_for_each(|node| self.visit(node, scope, out))
    }

    fn unsupported_node(&self, node: &SyntaxNode) -> TranslateError {
        self.error(node.span, format!("Unsupported node type {}", node.node.kind()))
    }

    fn error(&self, span: Span, message: impl Into<String>) -> TranslateError {
        TranslateError::unsupported(self.file, span, message)
    }
}
