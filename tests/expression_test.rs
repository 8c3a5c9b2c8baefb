mod common;
use sbasic::lang::ErrorCode;
use sbasic::mach::{Runtime, Val};

fn eval(s: &str) -> Val {
    Runtime::default().evaluate(s).unwrap()
}

fn fails(s: &str) -> ErrorCode {
    let e = Runtime::default().evaluate(s).unwrap_err();
    for code in [
        ErrorCode::DivisionByZero,
        ErrorCode::TypeMismatch,
        ErrorCode::SyntaxError,
        ErrorCode::MissingOperand,
        ErrorCode::UndefinedVariable,
        ErrorCode::IllegalFunctionCall,
        ErrorCode::Overflow,
    ]
    .iter()
    {
        if e.is(*code) {
            return *code;
        }
    }
    panic!("unexpected {}", e)
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4"), Val::Number(14.0));
    assert_eq!(eval("(2+3)*4"), Val::Number(20.0));
    assert_eq!(eval("2 * 3 ^ 2"), Val::Number(36.0));
    assert_eq!(eval("8 - 2 + 1"), Val::Number(7.0));
    assert_eq!(eval("-(1 + 2) * 2"), Val::Number(-6.0));
    assert_eq!(eval("((((5))))"), Val::Number(5.0));
}

#[test]
fn test_comparisons() {
    assert_eq!(eval("1 < 2"), Val::Number(1.0));
    assert_eq!(eval("2 <> 2"), Val::Number(0.0));
    assert_eq!(eval("2 =< 2"), Val::Number(1.0));
    assert_eq!(eval("3 => 4"), Val::Number(0.0));
    assert_eq!(eval("1 + 1 = 2 AND 2 * 2 = 4"), Val::Number(1.0));
    assert_eq!(eval("0 NOR 0"), Val::Number(1.0));
    assert_eq!(eval("NOT 0 OR 0"), Val::Number(1.0));
}

#[test]
fn test_string_operators() {
    assert_eq!(eval(r#""A" + "B""#), Val::from("AB"));
    assert_eq!(eval(r#""AB" * 3"#), Val::from("ABABAB"));
    assert_eq!(eval(r#"3 * "AB""#), Val::from("ABABAB"));
    assert_eq!(eval(r#""AB" * 2.9"#), Val::from("ABAB"));
    assert_eq!(eval(r#"CHR$(72) + "I""#), Val::from("HI"));
    assert_eq!(fails(r#""A" < "B""#), ErrorCode::TypeMismatch);
    assert_eq!(fails(r#""A" / 2"#), ErrorCode::TypeMismatch);
    assert_eq!(fails(r#""A" + 2"#), ErrorCode::TypeMismatch);
}

#[test]
fn test_zero_arg_operators() {
    match eval("RND") {
        Val::Number(n) => assert!(n >= 0.0 && n < 1.0),
        v => panic!("{:?}", v),
    }
    assert_eq!(eval("INT(PI * 100)"), Val::Number(314.0));
    assert_eq!(eval("LEN(TIME$) + LEN(DATE$)"), Val::Number(18.0));
}

#[test]
fn test_failures() {
    assert_eq!(fails("5/0"), ErrorCode::DivisionByZero);
    assert_eq!(fails("(5"), ErrorCode::SyntaxError);
    assert_eq!(fails("5)"), ErrorCode::SyntaxError);
    assert_eq!(fails("5 5"), ErrorCode::SyntaxError);
    assert_eq!(fails("* 5"), ErrorCode::MissingOperand);
    assert_eq!(fails("Q + 1"), ErrorCode::UndefinedVariable);
    assert_eq!(fails("SQR(-4)"), ErrorCode::IllegalFunctionCall);
    assert_eq!(fails("10 ^ 400"), ErrorCode::Overflow);
    assert_eq!(fails("1 @ 2"), ErrorCode::SyntaxError);
    assert_eq!(fails(r#""open"#), ErrorCode::SyntaxError);
}

#[test]
fn test_variables_resolved() {
    let (out, _) = common::exec(&["10 A = 4 : B$ = \"X\"", "20 PRINT SQR(A) * 2; B$ * A"]);
    assert_eq!(out, "4XXXX\n");
}
