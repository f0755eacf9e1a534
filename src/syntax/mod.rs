//! Reader for the bracket notation of nouns.
//!
//! Atoms are decimal numbers, cells are written in brackets, and a bracket
//! with more than two nouns nests to the right: `[a b c]` is `[a [b c]]`.
//! `::` starts a comment that runs to the end of the line.

pub mod lexeme;
pub(crate) mod lexer;
pub(crate) mod parser;
pub mod span;

use crate::diagnostic::Diagnostic;
use crate::noun::Noun;
use lexer::Lexer;
use parser::Parser;

/// Read one noun from `source`.
pub fn parse(source: &str) -> Result<Noun, Vec<Diagnostic>> {
    let (tokens, lex_errors) = Lexer::new(source).tokenize();
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }
    Parser::new(tokens).parse_program()
}
