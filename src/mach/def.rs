use super::Val;
use crate::error;
use crate::lang::{Error, Ident};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of user function calls.
pub const MAX_FN_DEPTH: usize = 64;

/// ## User function definitions
///
/// A definition is a template expression. Calling it substitutes the
/// text of each evaluated argument for its parameter, then the result
/// is evaluated like any other expression.

#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    name: Ident,
    params: Vec<Ident>,
    body: Rc<str>,
}

impl Definition {
    pub fn new(name: &Ident, params: &[Ident], body: &Rc<str>) -> Definition {
        Definition {
            name: name.clone(),
            params: params.to_vec(),
            body: body.clone(),
        }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Result type must match the sigil on the function name.
    pub fn check_result(&self, val: Val) -> Result<Val> {
        match (&self.name, &val) {
            (Ident::Number(_), Val::Number(_)) | (Ident::String(_), Val::String(_)) => Ok(val),
            (Ident::Number(_), Val::String(_)) => {
                Err(error!(TypeMismatch; "A NUMBER WAS EXPECTED"))
            }
            (Ident::String(_), Val::Number(_)) => {
                Err(error!(TypeMismatch; "A STRING WAS EXPECTED"))
            }
        }
    }

    /// Body text with every parameter replaced by its argument.
    pub fn substitute(&self, args: &[Val]) -> Result<String> {
        if args.len() != self.params.len() {
            return Err(error!(SyntaxError; &format!(
                "{} EXPECTS {} ARGUMENTS",
                self.name,
                self.params.len()
            )));
        }
        for (param, arg) in self.params.iter().zip(args) {
            match (param, arg) {
                (Ident::Number(_), Val::String(_)) | (Ident::String(_), Val::Number(_)) => {
                    return Err(error!(TypeMismatch; &format!("ARGUMENT {}", param)));
                }
                _ => {}
            }
        }
        let mut out = String::with_capacity(self.body.len());
        let mut chars = self.body.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            if ch == '"' {
                out.push(ch);
                while let Some((_, ch)) = chars.next() {
                    out.push(ch);
                    if ch == '"' {
                        break;
                    }
                }
            } else if ch.is_ascii_alphabetic() {
                let mut end = i + ch.len_utf8();
                while let Some(&(j, ch)) = chars.peek() {
                    if !ch.is_ascii_alphanumeric() && ch != '$' {
                        break;
                    }
                    chars.next();
                    end = j + ch.len_utf8();
                    if ch == '$' {
                        break;
                    }
                }
                let word = &self.body[i..end];
                match self.position(word) {
                    Some(p) => out.push_str(&literal(&args[p])),
                    None => out.push_str(word),
                }
            } else {
                out.push(ch);
            }
        }
        Ok(out)
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.params
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(word))
    }
}

/// Source text that lexes back to the same value.
fn literal(val: &Val) -> String {
    match val {
        Val::Number(n) => format!("({})", n),
        Val::String(s) => format!("\"{}\"", s.replace('"', "\"\"")),
    }
}
