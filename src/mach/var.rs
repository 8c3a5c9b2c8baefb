use super::Val;
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Numbers and strings live in separate maps. The sigil on a name
/// picks the map, so a variable can never change type.

#[derive(Debug, Default)]
pub struct Var {
    numbers: HashMap<Rc<str>, f64>,
    strings: HashMap<Rc<str>, Rc<str>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
        self.strings.clear();
    }

    pub fn len(&self) -> usize {
        self.numbers.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fetch(&self, ident: &Ident) -> Result<Val> {
        let val = match ident {
            Ident::Number(name) => self.numbers.get(name).map(|n| Val::Number(*n)),
            Ident::String(name) => self.strings.get(name).map(|s| Val::String(s.clone())),
        };
        match val {
            Some(val) => Ok(val),
            None => Err(error!(UndefinedVariable; ident.name())),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        if self.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        match (ident, value) {
            (Ident::Number(name), Val::Number(n)) => {
                self.numbers.insert(name.clone(), n);
                Ok(())
            }
            (Ident::String(name), Val::String(s)) => {
                self.strings.insert(name.clone(), s);
                Ok(())
            }
            (Ident::Number(_), Val::String(_)) => {
                Err(error!(TypeMismatch; "A NUMBER WAS EXPECTED"))
            }
            (Ident::String(_), Val::Number(_)) => {
                Err(error!(TypeMismatch; "A STRING WAS EXPECTED"))
            }
        }
    }
}
