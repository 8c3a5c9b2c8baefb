/*!
## Rust Terminal Module

Console collaborators for PRINT and INPUT, and Ctrl-C wiring.

*/

use crate::mach::Runtime;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::atomic::Ordering;

/// Where PRINT output goes and INPUT lines come from.
pub trait Console {
    fn print(&mut self, s: &str);
    /// Shows `prompt` and reads one line. `Ok(None)` is end of input.
    /// An `Interrupted` error cancels the run.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Standard output and standard input.
#[derive(Debug, Default)]
pub struct StdConsole {}

impl StdConsole {
    pub fn new() -> StdConsole {
        StdConsole {}
    }
}

impl Console for StdConsole {
    fn print(&mut self, s: &str) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(s.as_bytes()).and_then(|_| stdout.flush()) {
            log::warn!("stdout: {}", e);
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// In-memory console. Input lines are queued up front; output and
/// prompts are captured in order.
#[derive(Debug, Default)]
pub struct BufferConsole {
    input: VecDeque<String>,
    output: String,
}

impl BufferConsole {
    pub fn new() -> BufferConsole {
        BufferConsole::default()
    }

    pub fn with_input<I, S>(lines: I) -> BufferConsole
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferConsole {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn push_input(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for BufferConsole {
    fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.input.pop_front())
    }
}

/// Ctrl-C stops the runtime at the next statement. Only one handler
/// may be installed per process.
pub fn interrupt_on_ctrlc(runtime: &Runtime) -> Result<(), ctrlc::Error> {
    let interrupt = runtime.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupt.store(true, Ordering::SeqCst);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console() {
        let mut console = BufferConsole::with_input(vec!["ONE", "TWO"]);
        console.print("HI\n");
        assert_eq!(console.read_line("? ").unwrap(), Some("ONE".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), Some("TWO".to_string()));
        assert_eq!(console.read_line("? ").unwrap(), None);
        assert_eq!(console.take_output(), "HI\n? > ? ");
        assert_eq!(console.output(), "");
    }
}
