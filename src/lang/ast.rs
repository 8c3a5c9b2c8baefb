use super::{Ident, LineNumber};
use std::rc::Rc;

/// ## Parsed statements
///
/// Expressions stay as source text. They are tokenized against the
/// variable store each time they run.

pub type Expression = Rc<str>;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Data(Vec<Rc<str>>),
    Def(Ident, Vec<Ident>, Expression),
    End,
    For(Ident, Expression, Expression, Option<Expression>),
    Gosub(LineNumber),
    Goto(LineNumber),
    If(Expression, Box<Statement>),
    Input(Option<Rc<str>>, Ident),
    Let(Ident, Expression),
    Next(Ident),
    Print(Vec<Expression>, bool),
    Read(Vec<Ident>),
    Rem,
    Restore(Option<LineNumber>),
    Return,
    Stop,
    Unknown,
}

impl Statement {
    pub fn is_data(&self) -> bool {
        matches!(self, Statement::Data(_))
    }
}
