use std::fs;

use quill::{
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::{Token, lex},
        parser::statement::parse_program,
        value::core::Value,
    },
    run_program,
};
use walkdir::WalkDir;

fn eval_source(source: &str) -> Option<Value> {
    match run_program(source) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {source}\nError: {e}"),
    }
}

fn assert_value(source: &str, expected: &Value) {
    assert_eq!(eval_source(source).as_ref(), Some(expected), "source: {source}");
}

fn assert_integer(source: &str, expected: i64) {
    assert_value(source, &Value::Integer(expected));
}

fn assert_boolean(source: &str, expected: bool) {
    assert_value(source, &Value::Bool(expected));
}

fn assert_null(source: &str) {
    assert_value(source, &Value::Null);
}

fn assert_inspect(source: &str, expected: &str) {
    let value = eval_source(source).unwrap_or_else(|| panic!("no value produced by: {source}"));
    assert_eq!(value.to_string(), expected, "source: {source}");
}

fn assert_error(source: &str, message: &str) {
    match run_program(source) {
        Ok(value) => panic!("expected error for {source}, got {value:?}"),
        Err(e) => assert_eq!(e.to_string(), message, "source: {source}"),
    }
}

fn assert_parses_to(source: &str, expected: &str) {
    let tokens = lex(source);
    let (program, errors) = parse_program(&mut tokens.iter().peekable());

    assert!(errors.is_empty(), "parse errors for {source}: {errors:?}");
    assert_eq!(program.to_string(), expected, "source: {source}");
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("5 + 5 * 2;", 15);
    assert_integer("(5 + 5) * 2", 20);
    assert_integer("50 / 2 * 2 + 10 - 5", 55);
    assert_integer("3 * (3 * 3) + 10", 37);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
}

#[test]
fn boolean_expressions() {
    assert_boolean("true", true);
    assert_boolean("false", false);
    assert_boolean("1 < 2", true);
    assert_boolean("1 > 2", false);
    assert_boolean("1 == 1", true);
    assert_boolean("1 != 2", true);
    assert_boolean("true == true", true);
    assert_boolean("true != false", true);
    assert_boolean("(1 < 2) == true", true);
    assert_boolean("(1 > 2) == true", false);
}

#[test]
fn bang_negates_truthiness() {
    assert_boolean("!true", false);
    assert_boolean("!false", true);
    assert_boolean("!5", false);
    assert_boolean("!!true", true);
    assert_boolean("!!5", true);

    // An untaken `if` is null, and null is falsy.
    assert_boolean("!(if (false) { 5 })", true);
    assert_boolean("!!(if (false) { 5 })", false);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_null("if (false) { 10 }");
    assert_null("if (1 > 2) { 10 }");
}

#[test]
fn return_statements() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 10; 9;", 10);
}

#[test]
fn return_bubbles_through_nested_blocks() {
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);

    let source = "let f = fn() {
        if (true) {
            if (true) {
                return 3;
            }
            return 2;
        }
        return 1;
    };
    f();";
    assert_integer(source, 3);

    // Statements after a function-level return never run.
    assert_integer("let f = fn() { return 1; 2; }; f();", 1);
}

#[test]
fn bare_return_yields_null() {
    assert_null("let f = fn(x) { if (x > 0) { return; } return 1; }; f(5);");
    assert_integer("let f = fn(x) { if (x > 0) { return; } return 1; }; f(0);", 1);
}

#[test]
fn let_bindings() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);

    // Rebinding replaces the previous value.
    assert_integer("let a = 1; let a = a + 1; a;", 2);

    // A program ending in `let` produces nothing to print.
    assert_eq!(eval_source("let a = 5;"), None);
}

#[test]
fn strings() {
    assert_inspect(r#""Hello World!""#, "Hello World!");
    assert_inspect(r#"let s = "Hello" + " " + "World"; s;"#, "Hello World");
    assert_boolean(r#"len("") == 0"#, true);
    assert_integer(r#"len("four")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);

    // Byte length, not character count.
    assert_integer(r#"len("héllo")"#, 6);
}

#[test]
fn arrays_and_indexing() {
    assert_inspect("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("let arr = [1, 2, 3]; arr[2];", 3);
    assert_integer("let arr = [1, 2, 3]; arr[0] + arr[1] + arr[2];", 6);

    // Out-of-range lookups are null, not errors.
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn builtin_len_rest_push() {
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_inspect("rest([1, 2, 3])", "[2, 3]");
    assert_null("rest([])");
    assert_inspect("push([], 1)", "[1]");
    assert_inspect("push([1, 2], [3])", "[1, 2, [3]]");
}

#[test]
fn rest_and_push_leave_the_original_alone() {
    assert_integer("let arr = [1, 2, 3]; push(arr, 4); len(arr);", 3);
    assert_integer("let arr = [1, 2, 3]; rest(arr); len(arr);", 3);
    assert_inspect("let arr = [1, 2, 3]; push(arr, 4);", "[1, 2, 3, 4]");
}

#[test]
fn builtin_errors() {
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");
    assert_error("len()", "wrong number of arguments. got=0, want=1");
    assert_error("rest(1)", "argument to `rest` must be ARRAY, got INTEGER");
    assert_error(r#"push("x", 1)"#, "argument to `push` must be ARRAY, got STRING");
}

#[test]
fn hash_literals_and_lookup() {
    assert_inspect(r#"{"one": 1}"#, "{one: 1}");
    assert_integer(r#"{"foo": 5}["foo"]"#, 5);
    assert_integer(r#"let key = "foo"; {"foo": 5}[key]"#, 5);
    assert_integer("{5: 5}[5]", 5);
    assert_integer("{true: 5}[true]", 5);
    assert_integer("{false: 5}[false]", 5);
    assert_integer(r#"{"thr" + "ee": 3}["three"]"#, 3);
    assert_null(r#"{}["foo"]"#);
    assert_null(r#"{"foo": 5}["bar"]"#);

    let source = r#"let two = "two";
    {"one": 1, two: 2, "thr" + "ee": 3, 4: 4, true: 5, false: 6}[two]"#;
    assert_integer(source, 2);
}

#[test]
fn hash_keys_agree_for_equal_values() {
    assert_eq!(Value::Str("name".into()).hash_key(),
               Value::Str("name".into()).hash_key());
    assert_eq!(Value::Integer(7).hash_key(), Value::Integer(7).hash_key());
    assert_eq!(Value::Bool(true).hash_key(), Value::Bool(true).hash_key());

    // The type tag is part of the key, so equal discriminants of different
    // types stay distinct.
    assert_ne!(Value::Integer(1).hash_key(), Value::Bool(true).hash_key());
    assert_ne!(Value::Str("1".into()).hash_key(), Value::Integer(1).hash_key());

    assert!(Value::Null.hash_key().is_none());
}

#[test]
fn functions_and_calls() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
    assert_null("let noop = fn() { }; noop();");

    // A body ending in `let` produces null.
    assert_null("let f = fn() { let a = 1; }; f();");

    assert_inspect("fn(x) { x + 2; }", "fn(x) { (x + 2) }");
}

#[test]
fn closures_capture_their_defining_environment() {
    let source = "let makeAdder = fn(x) { fn(y) { x + y } };
    let addTwo = makeAdder(2);
    addTwo(3);";
    assert_integer(source, 5);

    // The captured x is not affected by a later binding at the call site.
    let source = "let makeAdder = fn(x) { fn(y) { x + y } };
    let addTwo = makeAdder(2);
    let x = 99;
    addTwo(3);";
    assert_integer(source, 5);

    let source = "let counter = fn(x) {
        if (x > 3) {
            return true;
        } else {
            counter(x + 1);
        }
    };
    counter(0);";
    assert_boolean(source, true);

    let source = "let fibonacci = fn(n) {
        if (n < 2) {
            return n;
        }
        fibonacci(n - 1) + fibonacci(n - 2);
    };
    fibonacci(10);";
    assert_integer(source, 55);
}

#[test]
fn higher_order_functions() {
    let source = "let applyTwice = fn(f, x) { f(f(x)) };
    applyTwice(fn(x) { x + 3 }, 2);";
    assert_integer(source, 8);

    let source = "let compose = fn(f, g) { fn(x) { g(f(x)) } };
    let inc = fn(x) { x + 1 };
    let double = fn(x) { x * 2 };
    compose(inc, double)(5);";
    assert_integer(source, 12);
}

#[test]
fn runtime_error_shapes() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error(r#""Hello" - "World""#, "unknown operator: STRING - STRING");
    assert_error(r#""a" == "a""#, "unknown operator: STRING == STRING");
    assert_error(r#"{"name": "quill"}[fn(x) { x }];"#, "unusable as hash key: FUNCTION");
    assert_error("{fn(x) { x }: 1}", "unusable as hash key: FUNCTION");
    assert_error("5[0]", "index operator not supported: INTEGER");
    assert_error("[1, 2, 3][true]", "index operator not supported: ARRAY");
    assert_error("5(3)", "not a function: INTEGER");
    assert_error("let x = 1; x(3)", "not a function: INTEGER");
}

#[test]
fn user_function_arity_is_checked() {
    assert_error("fn(x) { x }(1, 2)", "wrong number of arguments. got=2, want=1");
    assert_error("let add = fn(x, y) { x + y }; add(1)",
                 "wrong number of arguments. got=1, want=2");
}

#[test]
fn division_by_zero_and_overflow_are_errors() {
    assert_error("1 / 0", "division by zero");
    assert_error("let x = 5 - 5; 10 / x", "division by zero");
    assert_error("9223372036854775807 + 1", "integer overflow");
    assert_error("-9223372036854775807 - 2", "integer overflow");
}

#[test]
fn errors_stop_argument_evaluation() {
    // The failing argument aborts the call before it happens.
    assert_error("len(foobar)", "identifier not found: foobar");
    assert_error("[1, 2 + true, crash]", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4) ((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_parses_to(source, expected);
    }
}

#[test]
fn index_binds_tighter_than_call() {
    assert_parses_to("a()[0]", "(a()[0])");
    assert_parses_to("a[0]()", "(a[0])()");
}

#[test]
fn parser_errors_are_nonfatal() {
    let tokens = lex("let x 5; let y = 10; y;");
    let (program, errors) = parse_program(&mut tokens.iter().peekable());

    // The malformed statement is reported, the later ones still parse.
    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
    assert!(errors[0].to_string()
                     .contains("expected next token to be =, got INT instead"));

    // A program with parse errors must not be evaluated.
    assert!(run_program("let x 5; let y = 10; y;").is_err());
}

#[test]
fn parser_error_messages() {
    let cases = [(")", "no prefix parse function for ) found"),
                 ("let = 5;", "expected next token to be IDENT, got = instead"),
                 ("@", "no prefix parse function for ILLEGAL(@) found"),
                 ("9999999999999999999999;", "could not parse 9999999999999999999999 as integer")];

    for (source, expected) in cases {
        let tokens = lex(source);
        let (_, errors) = parse_program(&mut tokens.iter().peekable());

        assert!(!errors.is_empty(), "expected parse errors for {source}");
        assert!(errors[0].to_string().contains(expected),
                "source: {source}\nerror: {}",
                errors[0]);
    }
}

#[test]
fn lexer_token_stream() {
    let tokens: Vec<Token> = lex(r#"let a == != "hi" [5] @"#).into_iter()
                                                             .map(|(token, _)| token)
                                                             .collect();

    assert_eq!(tokens,
               vec![Token::Let,
                    Token::Identifier("a".to_string()),
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Str("hi".to_string()),
                    Token::LBracket,
                    Token::Integer("5".to_string()),
                    Token::RBracket,
                    Token::Illegal("@".to_string())]);
}

#[test]
fn lexer_tracks_lines_and_splits_identifiers() {
    assert_eq!(lex("1\n2"),
               vec![(Token::Integer("1".to_string()), 1),
                    (Token::Integer("2".to_string()), 2)]);

    // Digits never appear inside identifiers.
    assert_eq!(lex("abc123"),
               vec![(Token::Identifier("abc".to_string()), 1),
                    (Token::Integer("123".to_string()), 1)]);
}

#[test]
fn string_escapes_are_not_processed() {
    assert_integer(r#"len("a\nb")"#, 4);
    assert_inspect(r#""a\nb""#, r"a\nb");
}

#[test]
fn environment_persists_across_evaluations() {
    let env = Environment::new();

    let tokens = lex("let x = 41;");
    let (program, errors) = parse_program(&mut tokens.iter().peekable());
    assert!(errors.is_empty());
    eval_program(&program, &env).unwrap();

    let tokens = lex("x + 1;");
    let (program, errors) = parse_program(&mut tokens.iter().peekable());
    assert!(errors.is_empty());

    assert_eq!(eval_program(&program, &env).unwrap(), Some(Value::Integer(42)));
}

#[test]
fn demo_scripts_evaluate_to_true() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "quill")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run_program(&source) {
            Ok(value) => {
                assert_eq!(value,
                           Some(Value::Bool(true)),
                           "demo {path:?} did not finish with true");
            },
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
