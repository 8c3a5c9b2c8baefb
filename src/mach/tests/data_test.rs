use super::*;
use crate::lang::{ErrorCode, Ident};
use crate::mach::Val;

#[test]
fn test_read_in_order() {
    let (out, event) = run(&["10 DATA 1,2,3", "20 READ A,B,C", "30 PRINT A;B;C"]);
    assert_eq!(out, "123\n");
    assert_eq!(event, Event::Completed);
}

#[test]
fn test_read_past_end() {
    let (out, event) = run(&["10 DATA 1,2,3", "20 READ A,B,C", "30 PRINT C", "40 READ D"]);
    assert_eq!(out, "3\n");
    assert_eq!(error_code(&event), ErrorCode::OutOfData as u16);
}

#[test]
fn test_restore() {
    let (out, _) = run(&[
        "10 DATA 1,2",
        "20 DATA 3",
        "30 READ A,B,C : RESTORE : READ D",
        "40 RESTORE 20 : READ E",
        "50 PRINT A;B;C;D;E",
    ]);
    assert_eq!(out, "12313\n");
    let (_, event) = run(&["10 DATA 1", "20 RESTORE 15"]);
    assert_eq!(error_code(&event), ErrorCode::UndefinedLine as u16);
}

#[test]
fn test_read_strings() {
    let (out, _) = run(&[
        "10 DATA \"A, B\", plain text , -2.5",
        "20 READ A$, B$, C",
        "30 PRINT A$;\"|\";B$;\"|\";C",
    ]);
    assert_eq!(out, "A, B|plain text|-2.5\n");
}

#[test]
fn test_read_validates_lazily() {
    let mut r = Runtime::new(Program::load(&["10 READ A", "20 DATA \"X\""]).unwrap());
    let (_, event) = run_again(&mut r, None);
    assert_eq!(error_code(&event), ErrorCode::TypeMismatch as u16);
    assert!(r.var().fetch(&Ident::new("A").unwrap()).is_err());
}

#[test]
fn test_data_between_statements() {
    let (out, _) = run(&["10 PRINT 1 : DATA 5 : READ X : PRINT X"]);
    assert_eq!(out, "1\n5\n");
}

#[test]
fn test_input() {
    let mut r = Runtime::new(
        Program::load(&["10 INPUT \"NAME: \"; N$", "20 INPUT A", "30 PRINT N$; A * 2"]).unwrap(),
    );
    let mut console = BufferConsole::with_input(vec!["Ada Lovelace\n", " 21 "]);
    assert_eq!(r.run(&mut console, None), Event::Completed);
    assert_eq!(console.output(), "NAME: ? Ada Lovelace42\n");
    assert_eq!(
        r.var().fetch(&Ident::new("N$").unwrap()),
        Ok(Val::from("Ada Lovelace"))
    );
}

#[test]
fn test_input_errors() {
    let mut r = Runtime::new(Program::load(&["10 INPUT A"]).unwrap());
    let mut console = BufferConsole::with_input(vec!["TEN"]);
    let event = r.run(&mut console, None);
    assert_eq!(error_code(&event), ErrorCode::TypeMismatch as u16);
    let event = r.run(&mut console, None);
    assert_eq!(error_code(&event), ErrorCode::InputPastEnd as u16);
}
