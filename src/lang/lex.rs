use super::{token::*, Error, Ident};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Supplies values for names found while lexing. Lookups happen
/// eagerly so an undefined variable fails before evaluation starts.
pub trait Resolver {
    fn variable(&self, ident: &Ident) -> Result<Token>;
    /// Returns `None` when no user function has this name.
    fn call(&self, ident: &Ident, args: &[&str]) -> Option<Result<Token>>;
}

pub fn lex(s: &str, resolver: &dyn Resolver) -> Result<Vec<Token>> {
    BasicLexer {
        src: s,
        pos: 0,
        tokens: vec![],
        resolver,
    }
    .lex()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct BasicLexer<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token>,
    resolver: &'a dyn Resolver,
}

impl<'a> BasicLexer<'a> {
    fn lex(mut self) -> Result<Vec<Token>> {
        while let Some(ch) = self.peek() {
            if is_basic_whitespace(ch) {
                self.pos += 1;
                continue;
            }
            let token = if ch == '"' {
                self.string()?
            } else if let Some(op) = Operator::longest_prefix(self.rest()) {
                self.pos += op.symbol().len();
                self.operator(op)
            } else if is_basic_alphabetic(ch) {
                self.alphabetic()?
            } else if is_basic_digit(ch) || ch == '.' {
                self.number()?
            } else if ch == '(' {
                self.pos += 1;
                Token::LParen
            } else if ch == ')' {
                self.pos += 1;
                Token::RParen
            } else {
                let col = self.pos..self.pos + ch.len_utf8();
                return Err(error!(SyntaxError, ..&col; &format!("UNEXPECTED CHARACTER {}", ch)));
            };
            self.tokens.push(token);
        }
        Ok(self.tokens)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// A minus is negation wherever an operand is expected.
    fn operator(&self, op: Operator) -> Token {
        if op == Operator::Minus {
            let operand_expected = match self.tokens.last() {
                None | Some(Token::LParen) => true,
                Some(Token::Operator(prev)) => prev.arity() != 0,
                Some(_) => false,
            };
            if operand_expected {
                return Token::Operator(Operator::Negate);
            }
        }
        Token::Operator(op)
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.pos;
        self.pos += 1;
        let mut s = String::new();
        loop {
            let ch = match self.peek() {
                Some(ch) => ch,
                None => {
                    let col = start..self.pos;
                    return Err(error!(SyntaxError, ..&col; "UNTERMINATED STRING"));
                }
            };
            self.pos += ch.len_utf8();
            if ch == '"' {
                if self.peek() == Some('"') {
                    self.pos += 1;
                } else {
                    return Ok(Token::String(s.into()));
                }
            }
            s.push(ch);
        }
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.pos;
        let mut decimal = false;
        while let Some(ch) = self.peek() {
            if ch == '.' && !decimal {
                decimal = true;
            } else if !is_basic_digit(ch) {
                break;
            }
            self.pos += 1;
        }
        let s = &self.src[start..self.pos];
        match s.parse::<f64>() {
            Ok(n) => Ok(Token::Number(n)),
            Err(_) => {
                let col = start..self.pos;
                Err(error!(SyntaxError, ..&col; &format!("INVALID NUMBER {}", s)))
            }
        }
    }

    fn alphabetic(&mut self) -> Result<Token> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            self.pos += 1;
        }
        if self.peek() == Some('$') {
            self.pos += 1;
        }
        let col = start..self.pos;
        let ident = Ident::new(&self.src[start..self.pos]).map_err(|e| e.in_column(&col))?;
        if let Some((args, end)) = self.arguments() {
            let args: Vec<&str> = if args.trim().is_empty() {
                vec![]
            } else {
                split_arguments(args)
            };
            if let Some(token) = self.resolver.call(&ident, &args) {
                self.pos = end;
                return token;
            }
        }
        self.resolver
            .variable(&ident)
            .map_err(|e| e.in_column(&col))
    }

    /// Text between a balanced pair of parentheses directly after the
    /// current position, and the offset just past the closing one.
    fn arguments(&self) -> Option<(&'a str, usize)> {
        let rest = self.rest();
        let open = rest.find(|c| !is_basic_whitespace(c))?;
        if !rest[open..].starts_with('(') {
            return None;
        }
        let mut depth = 0;
        let mut quoted = false;
        for (i, ch) in rest.char_indices().skip(open) {
            match ch {
                '"' => quoted = !quoted,
                '(' if !quoted => depth += 1,
                ')' if !quoted => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((&rest[open + 1..i], self.pos + i + 1));
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// Splits on commas that are outside quotes and parentheses.
fn split_arguments(s: &str) -> Vec<&str> {
    let mut v = vec![];
    let mut depth = 0;
    let mut quoted = false;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth -= 1,
            ',' if !quoted && depth == 0 => {
                v.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    v.push(&s[start..]);
    v
}
