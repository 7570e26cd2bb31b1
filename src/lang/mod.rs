/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Minim language.

*/

use std::rc::Rc;

#[macro_use]
mod error;
mod lex;
mod parse;

pub use error::Error;
pub use error::Stage;
pub use lex::lex;
pub use parse::parse;

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;

/// Position of a token, expression, or statement in its source.
/// Rows and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    source: Rc<str>,
    row: usize,
    col: usize,
}

impl Location {
    pub fn new(source: &Rc<str>, row: usize, col: usize) -> Location {
        Location {
            source: Rc::clone(source),
            row,
            col,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.source, self.row, self.col)
    }
}
