mod common;
use common::*;
use sbasic::lang::ErrorCode;
use sbasic::mach::{Event, Program, Runtime};
use sbasic::term::BufferConsole;

#[test]
fn test_input_number_and_string() {
    let (out, event) = exec_with_input(
        &["10 INPUT A", "20 INPUT \"NAME\"; N$", "30 PRINT N$; A + 1"],
        &["41", "Grace"],
    );
    assert_eq!(out, "? NAMEGrace42\n");
    assert_eq!(event, Event::Completed);
}

#[test]
fn test_input_keeps_spaces_in_strings() {
    let (out, _) = exec_with_input(&["10 INPUT S$", "20 PRINT \"[\"; S$; \"]\""], &["  a b \r\n"]);
    assert_eq!(out, "? [  a b ]\n");
}

#[test]
fn test_input_not_a_number() {
    let (_, event) = exec_with_input(&["10 INPUT A"], &["twelve"]);
    match event {
        Event::Errored(e) => {
            assert!(e.is(ErrorCode::TypeMismatch));
            assert_eq!(e.line_number(), Some(10));
        }
        _ => panic!("{:?}", event),
    }
}

#[test]
fn test_input_past_end() {
    let (out, event) = exec(&["10 INPUT A"]);
    assert_eq!(out, "? ");
    match event {
        Event::Errored(e) => assert!(e.is(ErrorCode::InputPastEnd)),
        _ => panic!("{:?}", event),
    }
}

#[test]
fn test_default_prompt() {
    let mut r = Runtime::new(Program::load(&["10 INPUT X$"]).unwrap());
    r.set_default_prompt("> ");
    let mut console = BufferConsole::with_input(vec!["hi"]);
    assert_eq!(r.run(&mut console, None), Event::Completed);
    assert_eq!(console.output(), "> ");
}
