use crate::mach::{Event, Program, Runtime};
use crate::term::BufferConsole;

mod data_test;

fn run(source: &[&str]) -> (String, Event) {
    let mut r = Runtime::new(Program::load(source).unwrap());
    run_again(&mut r, None)
}

fn run_again(r: &mut Runtime, start: Option<u32>) -> (String, Event) {
    let mut console = BufferConsole::new();
    let event = r.run(&mut console, start);
    (console.take_output(), event)
}

fn error_code(event: &Event) -> u16 {
    match event {
        Event::Errored(e) => e.code(),
        _ => panic!("expected error, got {:?}", event),
    }
}
