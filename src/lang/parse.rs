use super::{ast::*, find_keyword, split_unquoted, token::Word, Error, Ident, LineNumber};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parses the text of one sub-statement. Unknown keywords are not an
/// error here; they fail if and when they are executed.
pub fn parse(s: &str) -> Result<Statement> {
    let s = s.trim();
    let (word, rest) = keyword(s);
    let rest = rest.trim();
    match word {
        Some(word) => Parser::statement(word, rest),
        None => match s.find('=') {
            Some(eq) if Ident::new(&s[..eq]).is_ok() => Parser::r#let(s),
            _ => Ok(Statement::Unknown),
        },
    }
}

/// Splits off the leading keyword. `GO TO` and `GO SUB` collapse to
/// their one-word forms.
fn keyword(s: &str) -> (Option<Word>, &str) {
    if let Some(rest) = s.strip_prefix('?') {
        return (Some(Word::Print), rest);
    }
    if let Some(rest) = s.strip_prefix('\'') {
        return (Some(Word::Rem), rest);
    }
    let (leading, rest) = alphabetic(s);
    let upper = leading.to_ascii_uppercase();
    if upper.starts_with("REM") {
        return (Some(Word::Rem), &s[3..]);
    }
    if upper == "GO" {
        let (second, after) = alphabetic(rest.trim_start());
        match second.to_ascii_uppercase().as_str() {
            "TO" => return (Some(Word::Goto), after),
            "SUB" => return (Some(Word::Gosub), after),
            _ => {}
        }
    }
    match Word::from_keyword(&upper) {
        Some(Word::Then) | Some(Word::To) | Some(Word::Step) | None => (None, s),
        Some(word) => (Some(word), rest),
    }
}

fn alphabetic(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or_else(|| s.len());
    s.split_at(end)
}

fn line_number(s: &str) -> Result<LineNumber> {
    let s = s.trim();
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = s.parse::<LineNumber>() {
            return Ok(n);
        }
        return Err(error!(Overflow; "INVALID LINE NUMBER"));
    }
    Err(error!(SyntaxError; "INVALID LINE NUMBER"))
}

fn expression(s: &str) -> Result<Expression> {
    let s = s.trim();
    if s.is_empty() {
        return Err(error!(SyntaxError; "EXPECTED EXPRESSION"));
    }
    Ok(s.into())
}

fn unquote(s: &str) -> Option<Rc<str>> {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        let inner = &s[1..s.len() - 1];
        let mut quotes = inner.split("\"\"");
        if quotes.all(|part| !part.contains('"')) {
            return Some(inner.replace("\"\"", "\"").into());
        }
    }
    None
}

struct Parser {}

impl Parser {
    fn statement(word: Word, rest: &str) -> Result<Statement> {
        match word {
            Word::Data => Parser::r#data(rest),
            Word::Def => Parser::r#def(rest),
            Word::End => Parser::bare(rest, Statement::End),
            Word::For => Parser::r#for(rest),
            Word::Gosub => Ok(Statement::Gosub(line_number(rest)?)),
            Word::Goto => Ok(Statement::Goto(line_number(rest)?)),
            Word::If => Parser::r#if(rest),
            Word::Input => Parser::r#input(rest),
            Word::Let => Parser::r#let(rest),
            Word::Next => Ok(Statement::Next(Ident::new(rest)?)),
            Word::Print => Parser::r#print(rest),
            Word::Read => Parser::r#read(rest),
            Word::Rem => Ok(Statement::Rem),
            Word::Restore => Parser::r#restore(rest),
            Word::Return => Parser::bare(rest, Statement::Return),
            Word::Stop => Parser::bare(rest, Statement::Stop),
            Word::Step | Word::Then | Word::To => Ok(Statement::Unknown),
        }
    }

    fn bare(rest: &str, statement: Statement) -> Result<Statement> {
        if rest.is_empty() {
            Ok(statement)
        } else {
            Err(error!(SyntaxError; &format!("UNEXPECTED {}", rest)))
        }
    }

    fn r#data(rest: &str) -> Result<Statement> {
        if rest.is_empty() {
            return Ok(Statement::Data(vec![]));
        }
        let fields = split_unquoted(rest, ',')
            .iter()
            .map(|s| Rc::from(s.trim()))
            .collect();
        Ok(Statement::Data(fields))
    }

    fn r#def(rest: &str) -> Result<Statement> {
        let eq = match rest.find('=') {
            Some(eq) => eq,
            None => return Err(error!(SyntaxError; "EXPECTED =")),
        };
        let head: String = rest[..eq].split_whitespace().collect();
        let (name, params) = match head.find('(') {
            Some(open) => {
                let params = match head[open + 1..].strip_suffix(')') {
                    Some(p) => p,
                    None => return Err(error!(SyntaxError; "EXPECTED )")),
                };
                let params = if params.is_empty() {
                    vec![]
                } else {
                    params
                        .split(',')
                        .map(Ident::new)
                        .collect::<Result<Vec<Ident>>>()?
                };
                (Ident::new(&head[..open])?, params)
            }
            None => (Ident::new(&head)?, vec![]),
        };
        Ok(Statement::Def(name, params, expression(&rest[eq + 1..])?))
    }

    fn r#for(rest: &str) -> Result<Statement> {
        let eq = match rest.find('=') {
            Some(eq) => eq,
            None => return Err(error!(SyntaxError; "EXPECTED =")),
        };
        let var = Ident::new(&rest[..eq])?;
        let rest = &rest[eq + 1..];
        let to = match find_keyword(rest, "TO") {
            Some(to) => to,
            None => return Err(error!(SyntaxError; "EXPECTED TO")),
        };
        let from = expression(&rest[..to])?;
        let rest = &rest[to + 2..];
        match find_keyword(rest, "STEP") {
            Some(step) => Ok(Statement::For(
                var,
                from,
                expression(&rest[..step])?,
                Some(expression(&rest[step + 4..])?),
            )),
            None => Ok(Statement::For(var, from, expression(rest)?, None)),
        }
    }

    fn r#if(rest: &str) -> Result<Statement> {
        let then = match find_keyword(rest, "THEN") {
            Some(then) => then,
            None => return Err(error!(SyntaxError; "EXPECTED THEN")),
        };
        let condition = expression(&rest[..then])?;
        let clause = rest[then + 4..].trim();
        if clause.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED STATEMENT"));
        }
        let statement = if clause.starts_with(|c: char| c.is_ascii_digit()) {
            Statement::Goto(line_number(clause)?)
        } else {
            parse(clause)?
        };
        if statement.is_data() {
            return Err(error!(SyntaxError; "DATA AFTER THEN"));
        }
        Ok(Statement::If(condition, Box::new(statement)))
    }

    fn r#input(rest: &str) -> Result<Statement> {
        let parts = split_unquoted(rest, ';');
        if parts.len() == 1 {
            return Ok(Statement::Input(None, Ident::new(rest)?));
        }
        let prompt = match unquote(parts[0]) {
            Some(prompt) => prompt,
            None => return Err(error!(SyntaxError; "EXPECTED PROMPT STRING")),
        };
        let var = &rest[parts[0].len() + 1..];
        Ok(Statement::Input(Some(prompt), Ident::new(var)?))
    }

    fn r#let(rest: &str) -> Result<Statement> {
        let eq = match rest.find('=') {
            Some(eq) => eq,
            None => return Err(error!(SyntaxError; "EXPECTED =")),
        };
        let var = Ident::new(&rest[..eq])?;
        Ok(Statement::Let(var, expression(&rest[eq + 1..])?))
    }

    fn r#print(rest: &str) -> Result<Statement> {
        if rest.is_empty() {
            return Ok(Statement::Print(vec![], true));
        }
        let parts = split_unquoted(rest, ';');
        let newline = parts.last().map_or(true, |s| !s.trim().is_empty());
        let items = parts
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Rc::from)
            .collect();
        Ok(Statement::Print(items, newline))
    }

    fn r#read(rest: &str) -> Result<Statement> {
        let vars = rest
            .split(',')
            .map(Ident::new)
            .collect::<Result<Vec<Ident>>>()?;
        Ok(Statement::Read(vars))
    }

    fn r#restore(rest: &str) -> Result<Statement> {
        if rest.is_empty() {
            Ok(Statement::Restore(None))
        } else {
            Ok(Statement::Restore(Some(line_number(rest)?)))
        }
    }
}
