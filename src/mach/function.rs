use super::{operation::MAX_STRING_LEN, val::format_number, Val};
use crate::error;
use crate::lang::{token::Operator, Error};
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in functions
///
/// Zero-arg operators compute a fresh value each time they appear.
/// Unary functions check the type of their single operand.

pub struct Function {}

impl Function {
    pub fn nullary(op: Operator) -> Result<Val> {
        match op {
            Operator::Rnd => Ok(Val::Number(rand::random::<f64>())),
            Operator::Pi => Ok(Val::Number(std::f64::consts::PI)),
            Operator::Time => Ok(Val::from(
                chrono::Local::now().format("%H:%M:%S").to_string().as_str(),
            )),
            Operator::Date => Ok(Val::from(
                chrono::Local::now().format("%m-%d-%Y").to_string().as_str(),
            )),
            _ => Err(error!(InternalError; &format!("{} TAKES AN ARGUMENT", op))),
        }
    }

    pub fn unary(op: Operator, val: Val) -> Result<Val> {
        match op {
            Operator::Negate => Function::math(val, |n| Ok(-n)),
            Operator::Not => Ok(Val::from(!val.is_true()?)),
            Operator::Abs => Function::math(val, |n| Ok(n.abs())),
            Operator::Atn => Function::math(val, |n| Ok(n.atan())),
            Operator::Cos => Function::math(val, |n| Ok(n.cos())),
            Operator::Exp => Function::math(val, |n| Ok(n.exp())),
            Operator::Int => Function::math(val, |n| Ok(n.floor())),
            Operator::Log => Function::math(val, Function::log),
            Operator::Sgn => Function::math(val, |n| Ok(Function::sgn(n))),
            Operator::Sin => Function::math(val, |n| Ok(n.sin())),
            Operator::Sqr => Function::math(val, Function::sqr),
            Operator::Tan => Function::math(val, |n| Ok(n.tan())),
            Operator::Len => Function::len(val),
            Operator::Asc => Function::asc(val),
            Operator::Val => Function::val(val),
            Operator::Chr => Function::chr(val),
            Operator::Str => Function::str(val),
            _ => Err(error!(InternalError; &format!("{} IS NOT UNARY", op))),
        }
    }

    fn math<F>(val: Val, f: F) -> Result<Val>
    where
        F: Fn(f64) -> Result<f64>,
    {
        let n = f(f64::try_from(val)?)?;
        if n.is_finite() {
            Ok(Val::Number(n))
        } else {
            Err(error!(Overflow))
        }
    }

    fn sgn(n: f64) -> f64 {
        if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn log(n: f64) -> Result<f64> {
        if n <= 0.0 {
            Err(error!(IllegalFunctionCall; "LOG OF NON-POSITIVE NUMBER"))
        } else {
            Ok(n.ln())
        }
    }

    fn sqr(n: f64) -> Result<f64> {
        if n < 0.0 {
            Err(error!(IllegalFunctionCall; "SQR OF NEGATIVE NUMBER"))
        } else {
            Ok(n.sqrt())
        }
    }

    fn len(val: Val) -> Result<Val> {
        let s = Rc::<str>::try_from(val)?;
        Ok(Val::Number(s.chars().count() as f64))
    }

    fn asc(val: Val) -> Result<Val> {
        let s = Rc::<str>::try_from(val)?;
        match s.chars().next() {
            Some(ch) => Ok(Val::Number(ch as u32 as f64)),
            None => Err(error!(IllegalFunctionCall; "ASC OF EMPTY STRING")),
        }
    }

    fn val(val: Val) -> Result<Val> {
        let s = Rc::<str>::try_from(val)?;
        match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Val::Number(n)),
            _ => Ok(Val::Number(0.0)),
        }
    }

    fn chr(val: Val) -> Result<Val> {
        let n = f64::try_from(val)?;
        let ch = if n >= 0.0 && n <= u32::max_value() as f64 {
            std::char::from_u32(n as u32)
        } else {
            None
        };
        match ch {
            Some(ch) => Ok(Val::String(ch.to_string().into())),
            None => Err(error!(IllegalFunctionCall; "INVALID CHARACTER CODE")),
        }
    }

    fn str(val: Val) -> Result<Val> {
        let s = format_number(f64::try_from(val)?);
        if s.len() > MAX_STRING_LEN {
            return Err(error!(StringTooLong));
        }
        Ok(Val::String(s.into()))
    }
}
