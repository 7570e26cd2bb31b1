//! # Minim
//!
//! A tiny statement language over a stack of numeric memory scopes.
//!
//! Every Minim statement ends in a period and starts with a one
//! character marker: `#` moves numbers in and out, `$` moves text,
//! `_` defines and follows labels, `@` calls system commands and `&`
//! manages memory scopes. Anything else is an expression.
//!
//! ```text
//! [0] = 10.
//! _> 1.
//! #< [0]--. $< ' '.
//! _? [0] > 0. _< 2. _< 1.
//! _> 2.
//! ```
//!
//! Install with `cargo install minim` and run a file with
//! `minim countdown.mm`. Everything after the source file is passed to
//! the program through the `a` literal.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
