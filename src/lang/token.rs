use std::rc::Rc;

/// ## Expression tokens
///
/// Variables are resolved while lexing so the evaluator only ever
/// sees literal values, operators, and parentheses.

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    String(Rc<str>),
    Operator(Operator),
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Operator(op) => write!(f, "{}", op),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Operator {
    Rnd,
    Pi,
    Time,
    Date,
    Negate,
    Abs,
    Asc,
    Atn,
    Chr,
    Cos,
    Exp,
    Int,
    Len,
    Log,
    Sgn,
    Sin,
    Sqr,
    Str,
    Tan,
    Val,
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    EqualLess,
    Greater,
    GreaterEqual,
    EqualGreater,
    Not,
    And,
    Or,
    Nor,
}

impl Operator {
    /// Every operator spelled out in source text. `Negate` is absent
    /// because it shares `-` with `Minus`; the lexer picks by context.
    pub const TABLE: [Operator; 36] = [
        Operator::Rnd,
        Operator::Pi,
        Operator::Time,
        Operator::Date,
        Operator::Abs,
        Operator::Asc,
        Operator::Atn,
        Operator::Chr,
        Operator::Cos,
        Operator::Exp,
        Operator::Int,
        Operator::Len,
        Operator::Log,
        Operator::Sgn,
        Operator::Sin,
        Operator::Sqr,
        Operator::Str,
        Operator::Tan,
        Operator::Val,
        Operator::Caret,
        Operator::Multiply,
        Operator::Divide,
        Operator::Plus,
        Operator::Minus,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::EqualLess,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::EqualGreater,
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Nor,
    ];

    /// Longest operator spelling that starts `s`, ignoring case.
    pub fn longest_prefix(s: &str) -> Option<Operator> {
        let mut found: Option<Operator> = None;
        for op in Operator::TABLE.iter() {
            let sym = op.symbol();
            let matches = s
                .get(..sym.len())
                .map_or(false, |head| head.eq_ignore_ascii_case(sym));
            if matches && found.map_or(true, |f| f.symbol().len() < sym.len()) {
                found = Some(*op);
            }
        }
        found
    }

    pub fn symbol(self) -> &'static str {
        use Operator::*;
        match self {
            Rnd => "RND",
            Pi => "PI",
            Time => "TIME$",
            Date => "DATE$",
            Negate => "-",
            Abs => "ABS",
            Asc => "ASC",
            Atn => "ATN",
            Chr => "CHR$",
            Cos => "COS",
            Exp => "EXP",
            Int => "INT",
            Len => "LEN",
            Log => "LOG",
            Sgn => "SGN",
            Sin => "SIN",
            Sqr => "SQR",
            Str => "STR$",
            Tan => "TAN",
            Val => "VAL",
            Caret => "^",
            Multiply => "*",
            Divide => "/",
            Plus => "+",
            Minus => "-",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            EqualLess => "=<",
            Greater => ">",
            GreaterEqual => ">=",
            EqualGreater => "=>",
            Not => "NOT",
            And => "AND",
            Or => "OR",
            Nor => "NOR",
        }
    }

    pub fn precedence(self) -> u8 {
        use Operator::*;
        match self {
            Rnd | Pi | Time | Date => 5,
            Negate | Abs | Asc | Atn | Chr | Cos | Exp | Int | Len | Log | Sgn | Sin | Sqr
            | Str | Tan | Val => 5,
            Caret | Multiply | Divide => 4,
            Plus | Minus => 3,
            Equal | NotEqual | Less | LessEqual | EqualLess | Greater | GreaterEqual
            | EqualGreater => 2,
            Not => 1,
            And | Or | Nor => 0,
        }
    }

    pub fn arity(self) -> usize {
        use Operator::*;
        match self {
            Rnd | Pi | Time | Date => 0,
            Negate | Abs | Asc | Atn | Chr | Cos | Exp | Int | Len | Log | Sgn | Sin | Sqr
            | Str | Tan | Val | Not => 1,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// ## Statement keywords

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Data,
    Def,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Step,
    Stop,
    Then,
    To,
}

impl Word {
    pub fn from_keyword(s: &str) -> Option<Word> {
        use Word::*;
        let word = match s.to_ascii_uppercase().as_str() {
            "DATA" => Data,
            "DEF" => Def,
            "END" => End,
            "FOR" => For,
            "GOSUB" => Gosub,
            "GOTO" => Goto,
            "IF" => If,
            "INPUT" => Input,
            "LET" => Let,
            "NEXT" => Next,
            "PRINT" | "?" => Print,
            "READ" => Read,
            "REM" | "'" => Rem,
            "RESTORE" => Restore,
            "RETURN" => Return,
            "STEP" => Step,
            "STOP" => Stop,
            "THEN" => Then,
            "TO" => To,
            _ => return None,
        };
        Some(word)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Data => write!(f, "DATA"),
            Def => write!(f, "DEF"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Rem => write!(f, "REM"),
            Restore => write!(f, "RESTORE"),
            Return => write!(f, "RETURN"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix() {
        assert_eq!(Operator::longest_prefix("<=3"), Some(Operator::LessEqual));
        assert_eq!(Operator::longest_prefix("=>3"), Some(Operator::EqualGreater));
        assert_eq!(Operator::longest_prefix("sqr(4)"), Some(Operator::Sqr));
        assert_eq!(Operator::longest_prefix("NORTH"), Some(Operator::Nor));
        assert_eq!(Operator::longest_prefix("chr$(65)"), Some(Operator::Chr));
        assert_eq!(Operator::longest_prefix("X1"), None);
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(Word::from_keyword("rem"), Some(Word::Rem));
        assert_eq!(Word::from_keyword("?"), Some(Word::Print));
        assert_eq!(Word::from_keyword("PICKLES"), None);
    }
}
