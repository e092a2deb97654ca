#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the shape of the produced tree for each accepted form, on automatic semicolon insertion,
/// and on error reporting.
mod tests {
    use super::*;

    fn parse_str(source: &str) -> Result<Vec<SyntaxNode>, Vec<CompileError>> {
        let tokens = lexer::lex(source)?;
        parse(&tokens)
    }

    fn single(source: &str) -> Node {
        let mut statements = parse_str(source).unwrap_or_else(|errs| panic!("parse({:?}) failed: {:?}", source, errs));
        assert_eq!(statements.len(), 1, "expected one statement for {:?}", source);
        statements.remove(0).node
    }

    fn expression_of(source: &str) -> Node {
        match single(source) {
            Node::ExpressionStatement(expr) => expr.node,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_variable_statement() {
        match single("var a: number = 1, b;") {
            Node::VariableStatement(stmt) => {
                assert_eq!(stmt.keyword, VariableKeyword::Var);
                assert_eq!(stmt.declarations.len(), 2);
                match &stmt.declarations[0].node {
                    Node::VariableDeclaration(decl) => {
                        assert_eq!(decl.name.node.as_identifier(), Some("a"));
                        assert!(matches!(
                            decl.ty.as_deref().map(|t| &t.node),
                            Some(Node::PrimitiveType(types::PrimitiveTypeId::Number))
                        ));
                        assert!(matches!(
                            decl.initializer.as_deref().map(|e| &e.node),
                            Some(Node::NumericLiteral(raw)) if raw == "1"
                        ));
                    }
                    other => panic!("Expected variable declaration, got {:?}", other),
                }
            }
            other => panic!("Expected variable statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_class_with_heritage_and_members() {
        let source = "export class X<T> extends Y implements A, B {\n  x: number = 42;\n  constructor() {}\n  get(a, b?: string): number { return 42; }\n}";
        match single(source) {
            Node::ClassDeclaration(class) => {
                assert_eq!(class.modifiers, vec![Modifier::Export]);
                assert_eq!(class.name.node.as_identifier(), Some("X"));
                assert_eq!(class.type_parameters.as_ref().map(Vec::len), Some(1));

                let clauses = class.heritage_clauses.expect("heritage clauses");
                assert_eq!(clauses.len(), 2);
                match (&clauses[0].node, &clauses[1].node) {
                    (Node::HeritageClause(extends), Node::HeritageClause(implements)) => {
                        assert_eq!(extends.token, HeritageToken::Extends);
                        assert_eq!(extends.types.len(), 1);
                        assert_eq!(implements.token, HeritageToken::Implements);
                        assert_eq!(implements.types.len(), 2);
                    }
                    other => panic!("Expected heritage clauses, got {:?}", other),
                }

                let members = class.members.expect("members");
                assert_eq!(members.len(), 3);
                assert!(matches!(members[0].node, Node::Property(_)));
                assert!(matches!(members[1].node, Node::Constructor(_)));
                match &members[2].node {
                    Node::Method(method) => {
                        assert_eq!(method.name.node.as_identifier(), Some("get"));
                        assert_eq!(method.parameters.len(), 2);
                        assert!(method.body.is_some());
                    }
                    other => panic!("Expected method, got {:?}", other),
                }
            }
            other => panic!("Expected class, got {:?}", other),
        }
    }

    #[test]
    fn test_modifier_words_can_name_members() {
        match single("class X { private static count: number; static() {} }") {
            Node::ClassDeclaration(class) => {
                let members = class.members.expect("members");
                match &members[0].node {
                    Node::Property(p) => {
                        assert_eq!(p.modifiers, vec![Modifier::Private, Modifier::Static]);
                        assert_eq!(p.name.node.as_identifier(), Some("count"));
                    }
                    other => panic!("Expected property, got {:?}", other),
                }
                match &members[1].node {
                    Node::Method(m) => {
                        assert!(m.modifiers.is_empty());
                        assert_eq!(m.name.node.as_identifier(), Some("static"));
                    }
                    other => panic!("Expected method, got {:?}", other),
                }
            }
            other => panic!("Expected class, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_function_parameters() {
        match single("function x(a = 42, ...rest: number, c?) {}") {
            Node::FunctionDeclaration(f) => {
                assert_eq!(f.parameters.len(), 3);
                match (&f.parameters[0].node, &f.parameters[1].node, &f.parameters[2].node) {
                    (Node::Parameter(a), Node::Parameter(rest), Node::Parameter(c)) => {
                        assert!(a.initializer.is_some());
                        assert!(a.dot_dot_dot.is_none());
                        assert!(rest.dot_dot_dot.is_some());
                        assert!(c.optional);
                    }
                    other => panic!("Expected parameters, got {:?}", other),
                }
            }
            other => panic!("Expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_function_overload_has_no_body() {
        match single("function x(a: number): void;") {
            Node::FunctionDeclaration(f) => assert!(f.body.is_none()),
            other => panic!("Expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_interface() {
        match single("interface I extends J { a: number; b?(x): string, c: Foo<number>[] }") {
            Node::InterfaceDeclaration(i) => {
                assert_eq!(i.members.len(), 3);
                assert!(matches!(&i.members[1].node, Node::Method(m) if m.optional && m.body.is_none()));
                match &i.members[2].node {
                    Node::Property(p) => {
                        assert!(matches!(p.ty.as_deref().map(|t| &t.node), Some(Node::ArrayType(_))));
                    }
                    other => panic!("Expected property, got {:?}", other),
                }
            }
            other => panic!("Expected interface, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_precedence() {
        // a + b * c parses as a + (b * c)
        match expression_of("a + b * c;") {
            Node::BinaryExpression(bin) => {
                assert_eq!(bin.operator, OperatorId::Plus);
                assert!(matches!(&bin.right.node, Node::BinaryExpression(r) if r.operator == OperatorId::Star));
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }

        // a - b - c parses as (a - b) - c
        match expression_of("a - b - c;") {
            Node::BinaryExpression(bin) => {
                assert!(matches!(&bin.left.node, Node::BinaryExpression(l) if l.operator == OperatorId::Minus));
                assert!(matches!(&bin.right.node, Node::Identifier(name) if name == "c"));
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        match expression_of("a = b = 1;") {
            Node::BinaryExpression(bin) => {
                assert_eq!(bin.operator, OperatorId::Eq);
                assert!(matches!(&bin.right.node, Node::BinaryExpression(r) if r.operator == OperatorId::Eq));
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_postfix_chains() {
        match expression_of("new Foo.Bar(1).baz[0](x)++;") {
            Node::PostfixUnaryExpression(update) => match &update.operand.node {
                Node::CallExpression(call) => {
                    assert_eq!(call.arguments.len(), 1);
                    assert!(matches!(&call.expression.node, Node::ElementAccessExpression(_)));
                }
                other => panic!("Expected call, got {:?}", other),
            },
            other => panic!("Expected postfix update, got {:?}", other),
        }
    }

    #[test]
    fn test_conditional_and_unary() {
        assert!(matches!(expression_of("!a ? -1 : [1, 2];"), Node::ConditionalExpression(_)));
        assert!(matches!(expression_of("(this);"), Node::ParenthesizedExpression(_)));
    }

    #[test]
    fn test_literals() {
        assert!(matches!(expression_of("1.23e-4;"), Node::NumericLiteral(raw) if raw == "1.23e-4"));
        assert!(matches!(expression_of("'a\\'b';"), Node::StringLiteral(value) if value == "a'b"));
        assert!(matches!(expression_of("/wo\\/t?/;"), Node::RegularExpressionLiteral(raw) if raw == "/wo\\/t?/"));
        assert!(matches!(expression_of("null;"), Node::NullKeyword));
    }

    #[test]
    fn test_semicolon_insertion() {
        let statements = parse_str("var a = 1\nvar b = 2\nfoo()").unwrap();
        assert_eq!(statements.len(), 3);

        let statements = parse_str("function f() { return 1 }").unwrap();
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_return_followed_by_newline_returns_nothing() {
        match single("function f() { return\n42 }") {
            Node::FunctionDeclaration(f) => match f.body.map(|b| b.node) {
                Some(Node::Block(block)) => {
                    assert_eq!(block.statements.len(), 2);
                    assert!(matches!(block.statements[0].node, Node::ReturnStatement(None)));
                }
                other => panic!("Expected block, got {:?}", other),
            },
            other => panic!("Expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon_on_same_line_is_error() {
        let errors = parse_str("var a = 1 var b = 2").unwrap_err();
        assert!(errors[0].message.contains("Expected ';'"), "got: {}", errors[0].message);
        assert_eq!(errors[0].span, Span::new(10, 13));
    }

    #[test]
    fn test_parameter_properties_are_rejected() {
        let errors = parse_str("class X { constructor(public x) {} }").unwrap_err();
        assert!(errors[0].message.contains("Expected ')' after parameters"), "got: {}", errors[0].message);
    }

    #[test]
    fn test_bad_class_member_reports_one_error() {
        let errors = parse_str("class X { 'quoted': number; }").unwrap_err();
        assert_eq!(errors.len(), 1, "got: {:?}", errors);
        assert!(errors[0].message.contains("Expected property name"), "got: {}", errors[0].message);
    }

    #[test]
    fn test_class_member_recovery_continues_with_next_member() {
        let source = "class X {\n  'a': number;\n  m() { return 1; }\n  'b' = 2;\n  y: number;\n}\nvar z = 1;";
        let errors = parse_str(source).unwrap_err();
        assert_eq!(errors.len(), 2, "got: {:?}", errors);
        assert!(errors.iter().all(|e| e.message.contains("Expected property name")));
    }

    #[test]
    fn test_bad_interface_member_reports_one_error() {
        let errors = parse_str("interface I { 'quoted': number; x: string; }").unwrap_err();
        assert_eq!(errors.len(), 1, "got: {:?}", errors);
    }

    #[test]
    fn test_recovery_reports_multiple_errors() {
        let errors = parse_str("var = 1;\nvar b = 2;\nvar = 3;").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message.contains("Expected identifier")));
    }

    #[test]
    fn test_spans_cover_statements() {
        let statements = parse_str("  var a = 1;").unwrap();
        assert_eq!(statements[0].span, Span::new(2, 12));
    }

    #[test]
    fn test_parse_source_file_keeps_text() {
        let file = parse_source_file("a.ts", "var a;\nclass X {}\n").unwrap();
        assert_eq!(file.file_name, "a.ts");
        assert_eq!(file.statements.len(), 2);
        assert_eq!(file.line_and_column(file.statements[1].span.start), (2, 1));
    }

    #[test]
    fn test_empty_token_slice() {
        assert_eq!(parse(&[]).unwrap(), Vec::new());
    }
}
