use crate::lang::{ast::Statement, parse, Error, Line, LineNumber};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Loaded program
///
/// Sub-statements sorted by line number then position in the line.
/// DATA never becomes an instruction; its fields go to the data buffer.

#[derive(Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    index: HashMap<LineNumber, usize>,
    data: DataBuffer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    line_number: LineNumber,
    ordinal: usize,
    source: Rc<str>,
    statement: Statement,
}

impl Instruction {
    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
    pub fn source(&self) -> &Rc<str> {
        &self.source
    }
    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

#[derive(Debug, Default)]
pub struct DataBuffer {
    fields: Vec<Rc<str>>,
    offsets: HashMap<LineNumber, usize>,
}

impl DataBuffer {
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    pub fn get(&self, cursor: usize) -> Option<&Rc<str>> {
        self.fields.get(cursor)
    }
    /// Cursor position for RESTORE to a DATA line.
    pub fn offset(&self, line_number: LineNumber) -> Option<usize> {
        self.offsets.get(&line_number).copied()
    }
    fn append(&mut self, line_number: LineNumber, fields: &[Rc<str>]) {
        let len = self.fields.len();
        self.offsets.entry(line_number).or_insert(len);
        self.fields.extend_from_slice(fields);
    }
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Loads numbered source text. Blank lines are ignored. The first
    /// malformed line aborts the load.
    pub fn load<I, S>(source: I) -> Result<Program>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = vec![];
        for s in source {
            if let Some(line) = Line::new(s.as_ref())? {
                lines.push(line);
            }
        }
        Program::from_lines(&lines)
    }

    pub fn from_lines(lines: &[Line]) -> Result<Program> {
        let mut program = Program::new();
        for line in lines {
            let number = line.number();
            for (ordinal, source) in line.statements().iter().enumerate() {
                let statement = parse(source).map_err(|e| e.in_line_number(number))?;
                if let Statement::Data(fields) = &statement {
                    program.data.append(number, fields);
                    continue;
                }
                program.instructions.push(Instruction {
                    line_number: number,
                    ordinal,
                    source: source.clone(),
                    statement,
                });
            }
        }
        program
            .instructions
            .sort_by_key(|i| (i.line_number, i.ordinal));
        for (pc, i) in program.instructions.iter().enumerate() {
            program.index.entry(i.line_number).or_insert(pc);
        }
        log::debug!(
            "loaded {} lines, {} statements, {} data fields",
            lines.len(),
            program.instructions.len(),
            program.data.len()
        );
        Ok(program)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<&Instruction> {
        self.instructions.get(pc)
    }

    /// Index of the first statement on a line.
    pub fn index_of(&self, line_number: LineNumber) -> Option<usize> {
        self.index.get(&line_number).copied()
    }

    pub fn data(&self) -> &DataBuffer {
        &self.data
    }
}
