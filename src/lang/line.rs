use super::{Error, LineNumber, MAX_LINE_LEN};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## A numbered source line
///
/// Holds the line number and the text of each `:` separated
/// sub-statement, in order.

#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    statements: Vec<Rc<str>>,
}

impl Line {
    /// Returns `None` for a blank line.
    pub fn new(s: &str) -> Result<Option<Line>> {
        if s.len() > MAX_LINE_LEN {
            return Err(error!(OutOfMemory; "LINE BUFFER OVERFLOW"));
        }
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| s.len());
        if digits == 0 {
            return Err(error!(SyntaxError; "INVALID LINE NUMBER"));
        }
        let number = match s[..digits].parse::<LineNumber>() {
            Ok(n) => n,
            Err(_) => return Err(error!(Overflow; "INVALID LINE NUMBER")),
        };
        let rest = s[digits..].trim();
        if rest.is_empty() {
            return Err(error!(SyntaxError, number; "MISSING STATEMENT"));
        }
        let statements = split_unquoted(rest, ':')
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Rc::from)
            .collect();
        Ok(Some(Line { number, statements }))
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn statements(&self) -> &[Rc<str>] {
        &self.statements
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<&str> = self.statements.iter().map(|s| s.as_ref()).collect();
        write!(f, "{} {}", self.number, s.join(":"))
    }
}

/// Splits on `sep` wherever an even number of quotes precede it.
pub fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut v = vec![];
    let mut quoted = false;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        if ch == '"' {
            quoted = !quoted;
        } else if ch == sep && !quoted {
            v.push(&s[start..i]);
            start = i + sep.len_utf8();
        }
    }
    v.push(&s[start..]);
    v
}

/// Finds a keyword outside quotes, ignoring case, that stands alone:
/// the characters on either side must not continue an identifier.
pub fn find_keyword(s: &str, keyword: &str) -> Option<usize> {
    let upper = s.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let continues = |b: u8| b.is_ascii_alphanumeric() || b == b'$';
    let mut quoted = false;
    for (i, ch) in upper.char_indices() {
        if ch == '"' {
            quoted = !quoted;
            continue;
        }
        if quoted || !upper[i..].starts_with(keyword) {
            continue;
        }
        let end = i + keyword.len();
        let before = i == 0 || !continues(bytes[i - 1]);
        let after = end == bytes.len() || !continues(bytes[end]);
        if before && after {
            return Some(i);
        }
    }
    None
}
