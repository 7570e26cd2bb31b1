//! # Minim
//!
//! Runs a Minim source file. See the library documentation for the
//! language manual.

mod term;

fn main() {
    term::main();
}
