mod common;
use common::*;

#[test]
fn test_builtin_functions() {
    assert_eq!(output(&["10 ?abs(9);abs(-9)"]), "99\n");
    assert_eq!(output(&["10 ?asc(\"A\")"]), "65\n");
    assert_eq!(output(&["10 ?atn(3)"]), "1.24905\n");
    assert_eq!(output(&["10 ?chr$(65);chr$(97)"]), "Aa\n");
    assert_eq!(output(&["10 ?cos(0);sin(0);tan(0)"]), "100\n");
    assert_eq!(output(&["10 ?exp(1)"]), "2.71828\n");
    assert_eq!(output(&["10 ?int(9.9);int(-9.1)"]), "9-10\n");
    assert_eq!(output(&["10 ?len(\"four\")"]), "4\n");
    assert_eq!(output(&["10 ?log(1)"]), "0\n");
    assert_eq!(output(&["10 ?sgn(-4);sgn(0);sgn(4)"]), "-101\n");
    assert_eq!(output(&["10 ?sqr(2)"]), "1.41421\n");
    assert_eq!(output(&["10 ?str$(1/8)+\"!\""]), "0.125!\n");
    assert_eq!(output(&["10 ?val(\"12.5\")*2"]), "25\n");
}

#[test]
fn test_function_errors() {
    assert_eq!(
        error(&["10 ? SQR(-1)"]),
        "ILLEGAL FUNCTION CALL IN 10; SQR OF NEGATIVE NUMBER"
    );
    assert_eq!(
        error(&["10 ? LOG(-1)"]),
        "ILLEGAL FUNCTION CALL IN 10; LOG OF NON-POSITIVE NUMBER"
    );
    assert_eq!(
        error(&["10 ? LEN(5)"]),
        "TYPE MISMATCH IN 10; A STRING WAS EXPECTED"
    );
}

#[test]
fn test_def_fn() {
    let out = output(&[
        "10 DEF FNSQ(X) = X * X",
        "20 DEF FNHI$(N$) = \"HI \" + N$",
        "30 DEF FNHYP(A, B) = SQR(FNSQ(A) + FNSQ(B))",
        "40 X = 100",
        "50 PRINT FNSQ(3); \" \"; FNHI$(\"BOB\"); \" \"; FNHYP(3, 4); \" \"; X",
    ]);
    assert_eq!(out, "9 HI BOB 5 100\n");
}

#[test]
fn test_def_fn_without_parameters() {
    assert_eq!(output(&["10 A = 2", "20 DEF FNA = A * 10", "30 A = 3", "40 PRINT FNA()"]), "30\n");
}

#[test]
fn test_def_fn_errors() {
    assert_eq!(
        error(&["10 DEF FNA(X) = X", "20 PRINT FNA(1, 2)"]),
        "SYNTAX ERROR IN 20; FNA EXPECTS 1 ARGUMENTS"
    );
    assert_eq!(
        error(&["10 DEF FNA$(X) = X", "20 PRINT FNA$(1)"]),
        "TYPE MISMATCH IN 20; A STRING WAS EXPECTED"
    );
    assert_eq!(
        error(&["10 PRINT FNB(1)"]),
        "UNDEFINED VARIABLE IN 10 (0..3); FNB"
    );
    assert_eq!(
        error(&["10 DEF FNR(X) = FNR(X + 1)", "20 PRINT FNR(1)"]),
        "OUT OF MEMORY IN 20; FNR NESTED TOO DEEPLY"
    );
}
