use sbasic::mach::{Event, Program, Runtime};
use sbasic::term::BufferConsole;

pub fn exec(source: &[&str]) -> (String, Event) {
    exec_with_input(source, &[])
}

pub fn exec_with_input(source: &[&str], input: &[&str]) -> (String, Event) {
    let program = match Program::load(source) {
        Ok(program) => program,
        Err(error) => return (String::new(), Event::Errored(error)),
    };
    let mut runtime = Runtime::new(program);
    let mut console = BufferConsole::with_input(input.iter().copied());
    let event = runtime.run(&mut console, None);
    (console.take_output(), event)
}

pub fn run(runtime: &mut Runtime, start: Option<u32>) -> (String, Event) {
    let mut console = BufferConsole::new();
    let event = runtime.run(&mut console, start);
    (console.take_output(), event)
}

/// Output of a program that must complete.
pub fn output(source: &[&str]) -> String {
    let (out, event) = exec(source);
    assert_eq!(event, Event::Completed, "output so far: {:?}", out);
    out
}

/// Display text of the error a program ends with.
pub fn error(source: &[&str]) -> String {
    match exec(source) {
        (_, Event::Errored(e)) => e.to_string(),
        (out, event) => panic!("expected error, got {:?} after {:?}", event, out),
    }
}
