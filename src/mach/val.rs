use crate::error;
use crate::lang::{token::Token, Error};
use std::convert::TryFrom;
use std::rc::Rc;

/// ## Runtime values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
}

impl Val {
    pub fn is_true(&self) -> Result<bool, Error> {
        Ok(f64::try_from(self.clone())? != 0.0)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        if b {
            Val::Number(1.0)
        } else {
            Val::Number(0.0)
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> Result<Self, Self::Error> {
        match val {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch; "A NUMBER WAS EXPECTED")),
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(val: Val) -> Result<Self, Self::Error> {
        match val {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch; "A STRING WAS EXPECTED")),
        }
    }
}

impl From<Val> for Token {
    fn from(val: Val) -> Self {
        match val {
            Val::Number(n) => Token::Number(n),
            Val::String(s) => Token::String(s),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", format_number(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

/// General numeric format: six significant digits, trailing zeros
/// dropped, scientific notation below 1e-4 or from 1e6 up.
pub fn format_number(n: f64) -> String {
    const PRECISION: i32 = 6;
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, n)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
