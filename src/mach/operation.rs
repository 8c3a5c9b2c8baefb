use super::Val;
use crate::error;
use crate::lang::{token::Operator, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Longest string a repetition may build.
pub const MAX_STRING_LEN: usize = 65535;

pub struct Operation {}

impl Operation {
    /// Applies a binary operator. Two numbers use the numeric rules,
    /// two strings only concatenate, and a string with a number only
    /// repeats. Every other pairing is a type mismatch.
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Operation::numeric(op, l, r),
            (String(l), String(r)) => match op {
                Operator::Plus => Operation::concat(&l, &r),
                _ => Err(error!(TypeMismatch; &format!("{} IS NOT VALID BETWEEN STRINGS", op))),
            },
            (String(s), Number(n)) | (Number(n), String(s)) => match op {
                Operator::Multiply => Operation::repeat(&s, n),
                _ => Err(error!(TypeMismatch; &format!(
                    "{} IS NOT VALID BETWEEN STRING AND NUMBER",
                    op
                ))),
            },
        }
    }

    fn numeric(op: Operator, l: f64, r: f64) -> Result<Val> {
        let n = match op {
            Operator::Caret => Operation::power(l, r)?,
            Operator::Multiply => l * r,
            Operator::Divide => Operation::divide(l, r)?,
            Operator::Plus => l + r,
            Operator::Minus => l - r,
            Operator::Equal => return Ok(Val::from(l == r)),
            Operator::NotEqual => return Ok(Val::from(l != r)),
            Operator::Less => return Ok(Val::from(l < r)),
            Operator::LessEqual | Operator::EqualLess => return Ok(Val::from(l <= r)),
            Operator::Greater => return Ok(Val::from(l > r)),
            Operator::GreaterEqual | Operator::EqualGreater => return Ok(Val::from(l >= r)),
            Operator::And => return Ok(Val::from(l != 0.0 && r != 0.0)),
            Operator::Or => return Ok(Val::from(l != 0.0 || r != 0.0)),
            Operator::Nor => return Ok(Val::from(l == 0.0 && r == 0.0)),
            _ => return Err(error!(InternalError; &format!("{} IS NOT BINARY", op))),
        };
        if n.is_finite() {
            Ok(Val::Number(n))
        } else {
            Err(error!(Overflow))
        }
    }

    fn divide(l: f64, r: f64) -> Result<f64> {
        if r == 0.0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(l / r)
        }
    }

    fn power(l: f64, r: f64) -> Result<f64> {
        if l == 0.0 && r < 0.0 {
            return Err(error!(DivisionByZero));
        }
        let n = l.powf(r);
        if n.is_nan() {
            Err(error!(IllegalFunctionCall; "NO REAL ROOT"))
        } else {
            Ok(n)
        }
    }

    fn concat(l: &str, r: &str) -> Result<Val> {
        if l.len() + r.len() > MAX_STRING_LEN {
            return Err(error!(StringTooLong));
        }
        let mut s = String::with_capacity(l.len() + r.len());
        s.push_str(l);
        s.push_str(r);
        Ok(Val::String(Rc::from(s)))
    }

    fn repeat(s: &str, n: f64) -> Result<Val> {
        let count = n.floor();
        if count <= 0.0 || s.is_empty() {
            return Ok(Val::from(""));
        }
        if count * s.len() as f64 > MAX_STRING_LEN as f64 {
            return Err(error!(StringTooLong));
        }
        Ok(Val::String(s.repeat(count as usize).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn num(n: f64) -> Val {
        Val::Number(n)
    }

    #[test]
    fn test_numeric() {
        use Operator::{And, Caret, EqualLess, Minus, Nor, NotEqual};
        assert_eq!(Operation::binary(Caret, num(2.0), num(10.0)), Ok(num(1024.0)));
        assert_eq!(Operation::binary(Minus, num(2.0), num(5.0)), Ok(num(-3.0)));
        assert_eq!(Operation::binary(EqualLess, num(2.0), num(2.0)), Ok(num(1.0)));
        assert_eq!(Operation::binary(NotEqual, num(2.0), num(2.0)), Ok(num(0.0)));
        assert_eq!(Operation::binary(Nor, num(0.0), num(0.0)), Ok(num(1.0)));
        assert_eq!(Operation::binary(And, num(-1.0), num(3.0)), Ok(num(1.0)));
    }

    #[test]
    fn test_division_by_zero() {
        let e = Operation::binary(Operator::Divide, num(5.0), num(0.0)).unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));
    }

    #[test]
    fn test_strings() {
        use Operator::{Equal, Multiply, Plus};
        assert_eq!(
            Operation::binary(Plus, Val::from("A"), Val::from("B")),
            Ok(Val::from("AB"))
        );
        assert_eq!(
            Operation::binary(Multiply, Val::from("AB"), num(3.7)),
            Ok(Val::from("ABABAB"))
        );
        assert_eq!(
            Operation::binary(Multiply, num(2.0), Val::from("AB")),
            Ok(Val::from("ABAB"))
        );
        assert_eq!(
            Operation::binary(Multiply, Val::from("AB"), num(-1.0)),
            Ok(Val::from(""))
        );
        let e = Operation::binary(Equal, Val::from("A"), Val::from("A")).unwrap_err();
        assert!(e.is(ErrorCode::TypeMismatch));
        let e = Operation::binary(Plus, Val::from("A"), num(1.0)).unwrap_err();
        assert!(e.is(ErrorCode::TypeMismatch));
        let e = Operation::binary(Multiply, Val::from("AB"), num(1e9)).unwrap_err();
        assert!(e.is(ErrorCode::StringTooLong));
    }
}
