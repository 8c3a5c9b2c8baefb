/*!
## Rust Machine Module

This Rust module loads and runs BASIC programs.

*/

mod def;
mod eval;
mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use def::Definition;
pub use def::MAX_FN_DEPTH;
pub use eval::Evaluator;
pub use function::Function;
pub use operation::Operation;
pub use operation::MAX_STRING_LEN;
pub use program::DataBuffer;
pub use program::Instruction;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::format_number;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
