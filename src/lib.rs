//! # Line-numbered BASIC
//!
//! A runtime for a small line-numbered BASIC: numbered statements,
//! `GOTO` and `GOSUB`, `FOR` loops, `DATA` with `READ` and `RESTORE`,
//! and variables typed by a trailing `$`.
//!
//! Load a program, then run it against a console.
//!
//! ```rust
//! use sbasic::mach::{Event, Program, Runtime};
//! use sbasic::term::BufferConsole;
//!
//! let program = Program::load(vec![
//!     "10 FOR I = 1 TO 3",
//!     "20 PRINT I;",
//!     "30 NEXT I",
//! ])
//! .unwrap();
//! let mut runtime = Runtime::new(program);
//! let mut console = BufferConsole::new();
//! assert_eq!(runtime.run(&mut console, None), Event::Completed);
//! assert_eq!(console.output(), "123");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
