/*!
## Rust Machine Module

This Rust module evaluates Minim statements against a stack of memory scopes.

*/

mod function;
mod label;
mod library;
mod memory;
mod operation;
mod program;
mod reference;
mod runtime;
mod stack;
mod val;

pub use function::Function;
pub use label::Labels;
pub use library::{Builtins, Command, Library};
pub use memory::Memory;
pub use operation::Operation;
pub use program::Program;
pub use reference::{Cell, Operand, Ref};
pub use runtime::{Config, Event, Runtime};
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
