/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

pub const MAX_LINE_LEN: usize = 1024;

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use lex::Resolver;
pub use line::find_keyword;
pub use line::split_unquoted;
pub use line::Line;
pub use parse::parse;

#[cfg(test)]
mod tests;
