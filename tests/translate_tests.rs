//! End-to-end translation tests: TypeScript source in, Dart token text out.

use ts2dart::translate_source;

fn translate(source: &str) -> String {
    translate_source("input.ts", source).unwrap_or_else(|err| panic!("translate({:?}) failed: {}", source, err))
}

fn expect(source: &str, dart: &str) {
    assert_eq!(translate(source), dart, "source: {:?}", source);
}

mod variables {
    use super::*;

    #[test]
    fn typed_with_initializer() {
        expect("var a: number = 1;", " num a = 1 ;\n");
    }

    #[test]
    fn typed_without_initializer() {
        expect("var a: number;", " num a ;\n");
        expect("var s: string;", " String s ;\n");
    }

    #[test]
    fn untyped_uses_var() {
        expect("var a = 1;", " var a = 1 ;\n");
        expect("let a;", " var a ;\n");
    }

    #[test]
    fn statements_follow_source_order() {
        expect("var a = 1;\nvar b = 2;", " var a = 1 ;\n var b = 2 ;\n");
    }
}

mod classes {
    use super::*;

    #[test]
    fn empty_class() {
        expect("class X {}", " class X {\n }\n");
    }

    #[test]
    fn implements_list() {
        expect("class X implements Y, Z {}", " class X implements Y , Z {\n }\n");
    }

    #[test]
    fn extends_then_implements() {
        expect("class X extends Y implements Z {}", " class X extends Y implements Z {\n }\n");
    }

    #[test]
    fn fields() {
        expect("class X { x: number; }", " class X {\n num x ; }\n");
        expect("class X { x: number = 42; }", " class X {\n num x = 42 ; }\n");
    }

    #[test]
    fn methods() {
        expect("class X { x() { return 42; } }", " class X {\n x ( ) { return 42 ; } }\n");
        expect("class X { x(): number { return 42; } }", " class X {\n num x ( ) { return 42 ; } }\n");
        expect("class X { x(a, b) { return 42; } }", " class X {\n x ( a , b ) { return 42 ; } }\n");
        expect(
            "class X { x(a: number, b: string) { return 42; } }",
            " class X {\n x ( num a , String b ) { return 42 ; } }\n",
        );
    }

    #[test]
    fn constructor_takes_class_name() {
        expect("class X { constructor() {} }", " class X {\n X ( ) { } }\n");
        expect(
            "class Point { constructor(x: number, y = 0) {} }",
            " class Point {\n Point ( num x , [ y = 0 ] ) { } }\n",
        );
    }

    #[test]
    fn generic_class() {
        expect("class Box<T> { value: T; }", " class Box < T > {\n T value ; }\n");
    }
}

mod functions {
    use super::*;

    #[test]
    fn default_parameter_is_bracketed() {
        expect("function x(a = 42) { return 42; }", " x ( [ a = 42 ] ) { return 42 ; }");
    }

    #[test]
    fn return_type_leads() {
        expect("function f(): string { return 'a'; }", " String f ( ) { return \"a\" ; }");
    }

    #[test]
    fn exported_function_drops_modifier() {
        expect("export function f() {}", " f ( ) { }");
    }
}

mod literals {
    use super::*;

    #[test]
    fn keywords() {
        expect("true;", " true ;");
        expect("false;", " false ;");
        expect("null;", " null ;");
    }

    #[test]
    fn numbers() {
        expect("1234;", " 1234 ;");
        expect("12.34;", " 12.34 ;");
        expect("1.23e-4;", " 1.23e-4 ;");
    }

    #[test]
    fn regular_expression() {
        expect("/wo\\/t?/;", " /wo\\/t?/ ;");
    }

    #[test]
    fn string_quotes_are_normalized() {
        expect("'hello\\' \"world';", " \"hello' \\\"world\" ;");
    }
}

#[test]
fn empty_input_translates_to_nothing() {
    expect("", "");
    expect("// just a comment\n", "");
}
