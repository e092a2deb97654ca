//! Syntax tree definitions for the TypeScript subset.
//!
//! Every node shape the parser can produce is a variant of the closed sum type [`Node`]. Nodes carry their
//! structural children directly (boxed or in vectors) and are wrapped in [`Spanned`] for source locations.
//! Trees are immutable once produced; consumers match on [`Node`] and use [`Node::kind`] when they need the symbolic
//! kind name (for example in diagnostics).

use std::fmt;

use ts2dart_core::lang::operators::OperatorId;
use ts2dart_core::lang::types::{self, PrimitiveTypeId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier spelling.
pub type Ident = String;

/// A spanned syntax tree node.
pub type SyntaxNode = Spanned<Node>;

// ============================================================================
// Source files
// ============================================================================

/// One parsed input file.
///
/// Owns the file text so diagnostics can turn byte offsets into 1-based line/column pairs without going back to
/// the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
    pub statements: Vec<SyntaxNode>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>, statements: Vec<SyntaxNode>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            file_name: file_name.into(),
            text,
            statements,
            line_starts,
        }
    }

    /// Return the 1-based `(line, column)` of a byte offset.
    ///
    /// Columns count characters, not bytes. Offsets past the end of the text clamp to the end.
    pub fn line_and_column(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self
            .text
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        (line_idx + 1, column + 1)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Every node shape produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Declarations / members
    VariableStatement(VariableStatement),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    InterfaceDeclaration(InterfaceDeclaration),
    HeritageClause(HeritageClause),
    TypeParameter(TypeParameter),
    Constructor(ConstructorDeclaration),
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    Parameter(Parameter),

    // Statements
    Block(Block),
    ExpressionStatement(Box<SyntaxNode>),
    ReturnStatement(Option<Box<SyntaxNode>>),
    IfStatement(IfStatement),
    WhileStatement(WhileStatement),
    EmptyStatement,

    // Expressions
    Identifier(Ident),
    NumericLiteral(String),
    StringLiteral(String),
    RegularExpressionLiteral(String),
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    ThisKeyword,
    BinaryExpression(BinaryExpression),
    PrefixUnaryExpression(UnaryExpression),
    PostfixUnaryExpression(UnaryExpression),
    CallExpression(CallExpression),
    NewExpression(NewExpression),
    PropertyAccessExpression(PropertyAccessExpression),
    ElementAccessExpression(ElementAccessExpression),
    ParenthesizedExpression(Box<SyntaxNode>),
    ArrayLiteralExpression(Vec<SyntaxNode>),
    ConditionalExpression(ConditionalExpression),

    // Types
    PrimitiveType(PrimitiveTypeId),
    TypeReference(TypeReference),
    ArrayType(Box<SyntaxNode>),
}

/// Modifiers accepted in front of declarations and class members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Export,
    Public,
    Private,
    Protected,
    Static,
}

/// Binding keyword of a variable statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKeyword {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    pub modifiers: Vec<Modifier>,
    pub keyword: VariableKeyword,
    /// [`Node::VariableDeclaration`] nodes, in source order.
    pub declarations: Vec<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: Box<SyntaxNode>,
    pub ty: Option<Box<SyntaxNode>>,
    pub initializer: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: Box<SyntaxNode>,
    pub type_parameters: Option<Vec<SyntaxNode>>,
    pub parameters: Vec<SyntaxNode>,
    pub ty: Option<Box<SyntaxNode>>,
    /// `None` for overload signatures.
    pub body: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: Box<SyntaxNode>,
    pub type_parameters: Option<Vec<SyntaxNode>>,
    pub heritage_clauses: Option<Vec<SyntaxNode>>,
    pub members: Option<Vec<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: Box<SyntaxNode>,
    pub type_parameters: Option<Vec<SyntaxNode>>,
    pub heritage_clauses: Option<Vec<SyntaxNode>>,
    pub members: Vec<SyntaxNode>,
}

/// Which relationship a heritage clause declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeritageToken {
    Extends,
    Implements,
}

impl fmt::Display for HeritageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeritageToken::Extends => write!(f, "extends"),
            HeritageToken::Implements => write!(f, "implements"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeritageClause {
    pub token: HeritageToken,
    /// [`Node::TypeReference`] nodes.
    pub types: Vec<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub name: Box<SyntaxNode>,
    pub constraint: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDeclaration {
    pub modifiers: Vec<Modifier>,
    pub parameters: Vec<SyntaxNode>,
    pub body: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: Box<SyntaxNode>,
    pub optional: bool,
    pub ty: Option<Box<SyntaxNode>>,
    pub initializer: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: Box<SyntaxNode>,
    pub optional: bool,
    pub type_parameters: Option<Vec<SyntaxNode>>,
    pub parameters: Vec<SyntaxNode>,
    pub ty: Option<Box<SyntaxNode>>,
    pub body: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Span of the `...` token for rest parameters.
    pub dot_dot_dot: Option<Span>,
    pub name: Box<SyntaxNode>,
    pub optional: bool,
    pub ty: Option<Box<SyntaxNode>>,
    pub initializer: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub expression: Box<SyntaxNode>,
    pub then_statement: Box<SyntaxNode>,
    pub else_statement: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub expression: Box<SyntaxNode>,
    pub statement: Box<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<SyntaxNode>,
    pub operator: OperatorId,
    pub right: Box<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: OperatorId,
    pub operand: Box<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub expression: Box<SyntaxNode>,
    pub arguments: Vec<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub expression: Box<SyntaxNode>,
    pub arguments: Option<Vec<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccessExpression {
    pub expression: Box<SyntaxNode>,
    pub name: Box<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementAccessExpression {
    pub expression: Box<SyntaxNode>,
    pub argument: Box<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub condition: Box<SyntaxNode>,
    pub when_true: Box<SyntaxNode>,
    pub when_false: Box<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    /// An [`Node::Identifier`].
    pub type_name: Box<SyntaxNode>,
    pub type_arguments: Option<Vec<SyntaxNode>>,
}

// ============================================================================
// Kinds
// ============================================================================

/// Field-less discriminant of [`Node`].
///
/// Names follow the TypeScript compiler's `SyntaxKind` spelling so diagnostics read the way TypeScript users
/// expect (`IfStatement`, `BooleanKeyword`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    VariableStatement,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    HeritageClause,
    TypeParameter,
    Constructor,
    Property,
    Method,
    Parameter,
    Block,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,
    WhileStatement,
    EmptyStatement,
    Identifier,
    NumericLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    ThisKeyword,
    BinaryExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    CallExpression,
    NewExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    ParenthesizedExpression,
    ArrayLiteralExpression,
    ConditionalExpression,
    NumberKeyword,
    StringKeyword,
    VoidKeyword,
    BooleanKeyword,
    AnyKeyword,
    TypeReference,
    ArrayType,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Node {
    /// Return the discriminant of this node.
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Node::VariableStatement(_) => SyntaxKind::VariableStatement,
            Node::VariableDeclaration(_) => SyntaxKind::VariableDeclaration,
            Node::FunctionDeclaration(_) => SyntaxKind::FunctionDeclaration,
            Node::ClassDeclaration(_) => SyntaxKind::ClassDeclaration,
            Node::InterfaceDeclaration(_) => SyntaxKind::InterfaceDeclaration,
            Node::HeritageClause(_) => SyntaxKind::HeritageClause,
            Node::TypeParameter(_) => SyntaxKind::TypeParameter,
            Node::Constructor(_) => SyntaxKind::Constructor,
            Node::Property(_) => SyntaxKind::Property,
            Node::Method(_) => SyntaxKind::Method,
            Node::Parameter(_) => SyntaxKind::Parameter,
            Node::Block(_) => SyntaxKind::Block,
            Node::ExpressionStatement(_) => SyntaxKind::ExpressionStatement,
            Node::ReturnStatement(_) => SyntaxKind::ReturnStatement,
            Node::IfStatement(_) => SyntaxKind::IfStatement,
            Node::WhileStatement(_) => SyntaxKind::WhileStatement,
            Node::EmptyStatement => SyntaxKind::EmptyStatement,
            Node::Identifier(_) => SyntaxKind::Identifier,
            Node::NumericLiteral(_) => SyntaxKind::NumericLiteral,
            Node::StringLiteral(_) => SyntaxKind::StringLiteral,
            Node::RegularExpressionLiteral(_) => SyntaxKind::RegularExpressionLiteral,
            Node::TrueKeyword => SyntaxKind::TrueKeyword,
            Node::FalseKeyword => SyntaxKind::FalseKeyword,
            Node::NullKeyword => SyntaxKind::NullKeyword,
            Node::ThisKeyword => SyntaxKind::ThisKeyword,
            Node::BinaryExpression(_) => SyntaxKind::BinaryExpression,
            Node::PrefixUnaryExpression(_) => SyntaxKind::PrefixUnaryExpression,
            Node::PostfixUnaryExpression(_) => SyntaxKind::PostfixUnaryExpression,
            Node::CallExpression(_) => SyntaxKind::CallExpression,
            Node::NewExpression(_) => SyntaxKind::NewExpression,
            Node::PropertyAccessExpression(_) => SyntaxKind::PropertyAccessExpression,
            Node::ElementAccessExpression(_) => SyntaxKind::ElementAccessExpression,
            Node::ParenthesizedExpression(_) => SyntaxKind::ParenthesizedExpression,
            Node::ArrayLiteralExpression(_) => SyntaxKind::ArrayLiteralExpression,
            Node::ConditionalExpression(_) => SyntaxKind::ConditionalExpression,
            Node::PrimitiveType(id) => match id {
                PrimitiveTypeId::Number => SyntaxKind::NumberKeyword,
                PrimitiveTypeId::String => SyntaxKind::StringKeyword,
                PrimitiveTypeId::Void => SyntaxKind::VoidKeyword,
                PrimitiveTypeId::Boolean => SyntaxKind::BooleanKeyword,
                PrimitiveTypeId::Any => SyntaxKind::AnyKeyword,
            },
            Node::TypeReference(_) => SyntaxKind::TypeReference,
            Node::ArrayType(_) => SyntaxKind::ArrayType,
        }
    }

    /// Return the identifier spelling if this is an [`Node::Identifier`].
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Node::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Identifier(name) => write!(f, "{name}"),
            Node::PrimitiveType(id) => write!(f, "{}", types::as_str(*id)),
            other => write!(f, "{}", other.kind()),
        }
    }
}
