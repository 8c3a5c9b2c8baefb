use super::def::Definition;
use super::eval::Evaluator;
use super::{Program, Stack, Val, Var};
use crate::error;
use crate::lang::{ast::Statement, Error, ErrorCode, Ident, LineNumber};
use crate::term::Console;
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement executor
///
/// Owns the variables, user functions, and control-flow state for one
/// program. The program counter is advanced before a statement runs,
/// so jumps store their target directly.

pub struct Runtime {
    program: Rc<Program>,
    var: Var,
    functions: HashMap<Ident, Definition>,
    gosub: Stack<usize>,
    loops: BTreeMap<Ident, LoopFrame>,
    data_cursor: usize,
    pc: usize,
    interrupt: Arc<AtomicBool>,
    prompt: String,
}

/// How a run ended.
#[derive(Debug, PartialEq)]
pub enum Event {
    Completed,
    Stopped,
    Interrupted,
    Errored(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LoopFrame {
    end: f64,
    step: f64,
    reentry: usize,
}

enum Flow {
    Next,
    Stop,
    End,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Program::new())
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program: Rc::new(program),
            var: Var::new(),
            functions: HashMap::new(),
            gosub: Stack::new("GOSUB NESTED TOO DEEPLY"),
            loops: BTreeMap::new(),
            data_cursor: 0,
            pc: 0,
            interrupt: Arc::new(AtomicBool::new(false)),
            prompt: "? ".to_string(),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Replaces the program. Variables and user functions are kept.
    pub fn set_program(&mut self, program: Program) {
        self.program = Rc::new(program);
        self.reset_control();
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Drops all variables, user functions, and control-flow state.
    pub fn clear(&mut self) {
        self.var.clear();
        self.functions.clear();
        self.reset_control();
    }

    pub fn set_default_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    /// Setting the flag stops a run at the next statement boundary.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::SeqCst);
    }

    /// Evaluates an expression against the current variables.
    pub fn evaluate(&self, expr: &str) -> Result<Val> {
        Evaluator::new(&self.var, &self.functions).evaluate(expr)
    }

    fn reset_control(&mut self) {
        self.gosub.clear();
        self.loops.clear();
        self.data_cursor = 0;
        self.pc = 0;
    }

    /// Runs from the first statement, or from the first statement of
    /// `start`. Control-flow state is reset; variables are not.
    pub fn run(&mut self, console: &mut dyn Console, start: Option<LineNumber>) -> Event {
        self.reset_control();
        self.interrupt.store(false, Ordering::SeqCst);
        if let Some(line_number) = start {
            match self.program.index_of(line_number) {
                Some(pc) => self.pc = pc,
                None => {
                    let error = error!(UndefinedLine; &line_number.to_string());
                    log::debug!("run ended: {}", error);
                    return Event::Errored(error);
                }
            }
        }
        log::debug!(
            "run from {:?} over {} statements",
            start,
            self.program.len()
        );
        let program = Rc::clone(&self.program);
        let event = loop {
            if self.interrupt.swap(false, Ordering::SeqCst) {
                break Event::Interrupted;
            }
            let instruction = match program.get(self.pc) {
                Some(instruction) => instruction,
                None => break Event::Completed,
            };
            log::trace!(
                "{} [{}] {}",
                instruction.line_number(),
                self.pc,
                instruction.source()
            );
            self.pc += 1;
            match self.execute(instruction.statement(), instruction.source(), console) {
                Ok(Flow::Next) => {}
                Ok(Flow::Stop) => break Event::Stopped,
                Ok(Flow::End) => break Event::Completed,
                Err(e) if e.is(ErrorCode::Break) => break Event::Interrupted,
                Err(e) => {
                    let e = if e.line_number().is_none() {
                        e.in_line_number(instruction.line_number())
                    } else {
                        e
                    };
                    break Event::Errored(e.in_statement(instruction.source()));
                }
            }
        };
        match &event {
            Event::Errored(e) => log::debug!("run ended: {}", e),
            _ => log::debug!("run ended: {:?}", event),
        }
        event
    }

    fn execute(
        &mut self,
        statement: &Statement,
        source: &str,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        match statement {
            Statement::Data(_) | Statement::Rem => {}
            Statement::Def(name, params, body) => {
                let def = Definition::new(name, params, body);
                self.functions.insert(name.clone(), def);
            }
            Statement::End => return Ok(Flow::End),
            Statement::For(var, from, to, step) => self.r#for(var, from, to, step)?,
            Statement::Gosub(line_number) => {
                let target = self.target(*line_number)?;
                self.gosub.push(self.pc)?;
                log::trace!("gosub {} from {}", line_number, self.pc);
                self.pc = target;
            }
            Statement::Goto(line_number) => {
                self.pc = self.target(*line_number)?;
                log::trace!("goto {}", line_number);
            }
            Statement::If(condition, then) => {
                if self.evaluate(condition)?.is_true()? {
                    return self.execute(then, source, console);
                }
            }
            Statement::Input(prompt, var) => self.r#input(prompt, var, console)?,
            Statement::Let(var, expr) => {
                let val = self.evaluate(expr)?;
                self.var.store(var, val)?;
            }
            Statement::Next(var) => self.r#next(var)?,
            Statement::Print(items, newline) => {
                for item in items {
                    console.print(&self.evaluate(item)?.to_string());
                }
                if *newline {
                    console.print("\n");
                }
            }
            Statement::Read(vars) => self.r#read(vars)?,
            Statement::Restore(line_number) => {
                self.data_cursor = match line_number {
                    None => 0,
                    Some(n) => match self.program.data().offset(*n) {
                        Some(offset) => offset,
                        None => return Err(error!(UndefinedLine; &format!("NO DATA IN {}", n))),
                    },
                };
            }
            Statement::Return => {
                if self.gosub.is_empty() {
                    return Err(error!(ReturnWithoutGosub));
                }
                self.pc = self.gosub.pop()?;
                log::trace!("return to {}", self.pc);
            }
            Statement::Stop => return Ok(Flow::Stop),
            Statement::Unknown => {
                return Err(error!(SyntaxError; &format!("UNKNOWN STATEMENT {}", source)));
            }
        }
        Ok(Flow::Next)
    }

    fn target(&self, line_number: LineNumber) -> Result<usize> {
        match self.program.index_of(line_number) {
            Some(pc) => Ok(pc),
            None => Err(error!(UndefinedLine; &line_number.to_string())),
        }
    }

    fn number(&self, expr: &str) -> Result<f64> {
        f64::try_from(self.evaluate(expr)?)
    }

    fn r#for(&mut self, var: &Ident, from: &str, to: &str, step: &Option<Rc<str>>) -> Result<()> {
        let from = self.number(from)?;
        let end = self.number(to)?;
        let step = match step {
            Some(step) => self.number(step)?,
            None => 1.0,
        };
        if step == 0.0 {
            return Err(error!(IllegalFunctionCall; "STEP OF ZERO"));
        }
        self.var.store(var, Val::Number(from))?;
        let frame = LoopFrame {
            end,
            step,
            reentry: self.pc,
        };
        self.loops.insert(var.clone(), frame);
        Ok(())
    }

    fn r#next(&mut self, var: &Ident) -> Result<()> {
        let frame = match self.loops.get(var) {
            Some(frame) => *frame,
            None => return Err(error!(NextWithoutFor; var.name())),
        };
        let n = f64::try_from(self.var.fetch(var)?)? + frame.step;
        self.var.store(var, Val::Number(n))?;
        let again = (frame.step > 0.0 && n <= frame.end) || (frame.step < 0.0 && n >= frame.end);
        if again {
            log::trace!("next {} = {}", var, n);
            self.pc = frame.reentry;
        } else {
            self.loops.remove(var);
        }
        Ok(())
    }

    fn r#input(
        &mut self,
        prompt: &Option<Rc<str>>,
        var: &Ident,
        console: &mut dyn Console,
    ) -> Result<()> {
        let prompt = match prompt {
            Some(prompt) => prompt.as_ref(),
            None => self.prompt.as_str(),
        };
        let line = match console.read_line(prompt) {
            Ok(Some(line)) => line,
            Ok(None) => return Err(error!(InputPastEnd)),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => return Err(error!(Break)),
            Err(e) => return Err(error!(InternalError; &e.to_string())),
        };
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        let val = match var {
            Ident::String(_) => Val::from(line),
            Ident::Number(_) => match line.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Val::Number(n),
                _ => return Err(error!(TypeMismatch; "A NUMBER WAS EXPECTED")),
            },
        };
        self.var.store(var, val)
    }

    fn r#read(&mut self, vars: &[Ident]) -> Result<()> {
        for var in vars {
            let field = match self.program.data().get(self.data_cursor) {
                Some(field) => field.clone(),
                None => return Err(error!(OutOfData)),
            };
            self.data_cursor += 1;
            let val = if var.is_string() && !field.starts_with('"') {
                Val::String(field)
            } else {
                self.evaluate(&field)?
            };
            self.var.store(var, val)?;
        }
        Ok(())
    }
}
