use super::def::{Definition, MAX_FN_DEPTH};
use super::{Function, Operation, Stack, Val, Var};
use crate::error;
use crate::lang::{lex, token::Operator, token::Token, Error, Ident, Resolver};
use std::cell::Cell;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Shunting-yard over an operator stack and a value stack. Operators
/// are applied as soon as precedence allows, so no tree is built.

pub struct Evaluator<'a> {
    var: &'a Var,
    functions: &'a HashMap<Ident, Definition>,
    depth: Cell<usize>,
}

enum Pending {
    Op(Operator),
    Paren,
}

impl<'a> Evaluator<'a> {
    pub fn new(var: &'a Var, functions: &'a HashMap<Ident, Definition>) -> Evaluator<'a> {
        Evaluator {
            var,
            functions,
            depth: Cell::new(0),
        }
    }

    pub fn evaluate(&self, s: &str) -> Result<Val> {
        let tokens = lex(s, self)?;
        reduce(tokens)
    }

    fn call_definition(&self, def: &Definition, args: &[&str]) -> Result<Val> {
        if self.depth.get() >= MAX_FN_DEPTH {
            return Err(error!(OutOfMemory; &format!("{} NESTED TOO DEEPLY", def.name())));
        }
        self.depth.set(self.depth.get() + 1);
        let result = args
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<Result<Vec<Val>>>()
            .and_then(|vals| def.substitute(&vals))
            .and_then(|text| self.evaluate(&text))
            .and_then(|val| def.check_result(val));
        self.depth.set(self.depth.get() - 1);
        result
    }
}

impl<'a> Resolver for Evaluator<'a> {
    fn variable(&self, ident: &Ident) -> Result<Token> {
        Ok(self.var.fetch(ident)?.into())
    }

    fn call(&self, ident: &Ident, args: &[&str]) -> Option<Result<Token>> {
        let def = self.functions.get(ident)?;
        Some(self.call_definition(def, args).map(Token::from))
    }
}

fn reduce(tokens: Vec<Token>) -> Result<Val> {
    let mut ops: Stack<Pending> = Stack::new("EXPRESSION TOO COMPLEX");
    let mut vals: Stack<Val> = Stack::new("EXPRESSION TOO COMPLEX");
    for token in tokens {
        match token {
            Token::Number(n) => vals.push(Val::Number(n))?,
            Token::String(s) => vals.push(Val::String(s))?,
            Token::LParen => ops.push(Pending::Paren)?,
            Token::RParen => loop {
                if ops.is_empty() {
                    return Err(error!(SyntaxError; "UNBALANCED PARENTHESES"));
                }
                match ops.pop()? {
                    Pending::Paren => break,
                    Pending::Op(op) => apply(op, &mut vals)?,
                }
            },
            Token::Operator(op) => match op.arity() {
                0 => vals.push(Function::nullary(op)?)?,
                1 => ops.push(Pending::Op(op))?,
                _ => {
                    while let Some(Pending::Op(top)) = ops.last() {
                        let top = *top;
                        let higher = top.precedence() > op.precedence();
                        let left = top.precedence() == op.precedence() && top.arity() == 2;
                        if !(higher || left) {
                            break;
                        }
                        ops.pop()?;
                        apply(top, &mut vals)?;
                    }
                    ops.push(Pending::Op(op))?;
                }
            },
        }
    }
    while !ops.is_empty() {
        match ops.pop()? {
            Pending::Paren => return Err(error!(SyntaxError; "UNBALANCED PARENTHESES")),
            Pending::Op(op) => apply(op, &mut vals)?,
        }
    }
    if vals.len() != 1 {
        return Err(error!(SyntaxError; "MALFORMED EXPRESSION"));
    }
    vals.pop()
}

fn apply(op: Operator, vals: &mut Stack<Val>) -> Result<()> {
    if vals.len() < op.arity() {
        return Err(error!(MissingOperand; &format!("{} NEEDS {} OPERANDS", op, op.arity())));
    }
    let val = if op.arity() == 1 {
        Function::unary(op, vals.pop()?)?
    } else {
        let (lhs, rhs) = vals.pop_2()?;
        Operation::binary(op, lhs, rhs)?
    };
    vals.push(val)
}
