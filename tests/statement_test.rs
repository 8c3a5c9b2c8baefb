mod common;
use common::*;
use sbasic::lang::{ErrorCode, Ident};
use sbasic::mach::{Event, Program, Runtime, Val};

#[test]
fn test_print() {
    assert_eq!(output(&["10 PRINT"]), "\n");
    assert_eq!(output(&["10 PRINT \"A;B\"; 1; \"C\""]), "A;B1C\n");
    assert_eq!(output(&["10 PRINT 1;", "20 PRINT 2"]), "12\n");
}

#[test]
fn test_number_format() {
    assert_eq!(output(&["10 PRINT 1/3"]), "0.333333\n");
    assert_eq!(output(&["10 PRINT 1000000 * 2"]), "2e+06\n");
    assert_eq!(output(&["10 PRINT 0.5 - 1"]), "-0.5\n");
}

#[test]
fn test_colon_statements_run_in_order() {
    assert_eq!(
        output(&["10 A = 1 : PRINT A : A = A + 1 : PRINT A"]),
        output(&["10 A = 1", "10 PRINT A", "10 A = A + 1", "10 PRINT A"])
    );
    assert_eq!(output(&["10 PRINT \"X:Y\" : PRINT \"Z\""]), "X:Y\nZ\n");
}

#[test]
fn test_lines_sorted() {
    assert_eq!(output(&["30 PRINT 3", "10 PRINT 1", "20 PRINT 2"]), "1\n2\n3\n");
}

#[test]
fn test_let() {
    assert_eq!(output(&["10 LET A$ = \"HI\" : B = 2 : PRINT A$ * B"]), "HIHI\n");
    assert_eq!(
        error(&["10 LET A = \"HI\""]),
        "TYPE MISMATCH IN 10; A NUMBER WAS EXPECTED"
    );
    assert_eq!(
        error(&["10 A$ = 1"]),
        "TYPE MISMATCH IN 10; A STRING WAS EXPECTED"
    );
}

#[test]
fn test_goto() {
    assert_eq!(
        output(&["10 GOTO 30", "20 PRINT \"NO\"", "30 PRINT \"YES\""]),
        "YES\n"
    );
    assert_eq!(output(&["10 GO TO 30", "20 END", "30 PRINT 3"]), "3\n");
    assert_eq!(error(&["10 GOTO 20"]), "UNDEFINED LINE IN 10; 20");
}

#[test]
fn test_end_and_stop() {
    let (out, event) = exec(&["10 PRINT 1", "20 END", "30 PRINT 2"]);
    assert_eq!(out, "1\n");
    assert_eq!(event, Event::Completed);
    let (out, event) = exec(&["10 PRINT 1 : STOP : PRINT 2"]);
    assert_eq!(out, "1\n");
    assert_eq!(event, Event::Stopped);
}

#[test]
fn test_rem() {
    assert_eq!(output(&["10 REM nothing here", "20 ' or here", "30 REMARK x : PRINT 1"]), "1\n");
}

#[test]
fn test_unknown_statement_fails_when_run() {
    let (out, event) = exec(&["10 PRINT 1", "20 FROB 2"]);
    assert_eq!(out, "1\n");
    match event {
        Event::Errored(e) => {
            assert!(e.is(ErrorCode::SyntaxError));
            assert_eq!(e.line_number(), Some(20));
            assert_eq!(e.statement(), Some("FROB 2"));
            assert_eq!(e.to_string(), "SYNTAX ERROR IN 20; UNKNOWN STATEMENT FROB 2");
        }
        _ => panic!("{:?}", event),
    }
    assert_eq!(output(&["10 GOTO 30", "20 FROB 2", "30 END"]), "");
}

#[test]
fn test_load_errors() {
    let e = Program::load(&["10 PRINT 1", "20 FOR I = 1"]).unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 20; EXPECTED TO");
    let e = Program::load(&["PRINT 1"]).unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR; INVALID LINE NUMBER");
    let e = Program::load(&["99999999999 PRINT 1"]).unwrap_err();
    assert!(e.is(ErrorCode::Overflow));
}

#[test]
fn test_restart_keeps_variables() {
    let mut r = Runtime::new(
        Program::load(&[
            "10 A = 1 : B$ = \"KEPT\"",
            "20 FOR I = 1 TO 3",
            "30 GOSUB 100",
            "40 NEXT I",
            "50 STOP",
            "60 PRINT A; B$",
            "70 READ X",
            "80 NEXT I",
            "90 DATA 5",
            "100 A = A * 2 : READ D : RETURN",
        ])
        .unwrap(),
    );
    let (_, event) = run(&mut r, None);
    assert_eq!(error_code(&event), ErrorCode::OutOfData);
    assert_eq!(r.var().fetch(&Ident::new("A").unwrap()), Ok(Val::Number(4.0)));
    r.clear();
    r.set_program(
        Program::load(&[
            "10 A = 1 : B$ = \"KEPT\"",
            "20 FOR I = 1 TO 3",
            "30 GOSUB 100",
            "40 NEXT I",
            "50 STOP",
            "60 PRINT A; B$",
            "70 READ X",
            "80 NEXT I",
            "90 DATA 5, 6, 7",
            "100 A = A * 2 : READ D : RETURN",
        ])
        .unwrap(),
    );
    let (_, event) = run(&mut r, None);
    assert_eq!(event, Event::Stopped);
    let (out, event) = run(&mut r, Some(60));
    assert_eq!(out, "8KEPT\n");
    assert_eq!(error_code(&event), ErrorCode::NextWithoutFor);
    assert_eq!(r.var().fetch(&Ident::new("X").unwrap()), Ok(Val::Number(5.0)));
}

#[test]
fn test_clear() {
    let mut r = Runtime::new(Program::load(&["10 A = 1"]).unwrap());
    run(&mut r, None);
    assert!(!r.var().is_empty());
    r.clear();
    assert!(r.var().is_empty());
    assert!(r.evaluate("A").is_err());
}

fn error_code(event: &Event) -> ErrorCode {
    match event {
        Event::Errored(e) => {
            for code in [ErrorCode::OutOfData, ErrorCode::NextWithoutFor].iter() {
                if e.is(*code) {
                    return *code;
                }
            }
            panic!("unexpected {}", e)
        }
        _ => panic!("expected error, got {:?}", event),
    }
}
