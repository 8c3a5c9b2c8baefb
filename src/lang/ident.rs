use super::Error;
use crate::error;
use std::rc::Rc;

// Used in tokens, statements, and variable memory

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub enum Ident {
    Number(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    /// Validates and upper-cases a name. A trailing `$` makes it a string.
    pub fn new(name: &str) -> Result<Ident, Error> {
        let name = name.trim().to_ascii_uppercase();
        let body = name.strip_suffix('$').unwrap_or(&name);
        let mut chars = body.chars();
        let valid = match chars.next() {
            Some(ch) => ch.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric()),
            None => false,
        };
        if !valid {
            return Err(error!(SyntaxError; &format!("INVALID VARIABLE NAME {}", name)));
        }
        if name.ends_with('$') {
            Ok(Ident::String(name.into()))
        } else {
            Ok(Ident::Number(name.into()))
        }
    }

    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Number(s) | Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigil() {
        assert_eq!(Ident::new("name$"), Ok(Ident::String("NAME$".into())));
        assert_eq!(Ident::new(" i1 "), Ok(Ident::Number("I1".into())));
        assert!(Ident::new("1A").is_err());
        assert!(Ident::new("A$B").is_err());
        assert!(Ident::new("$").is_err());
    }
}
