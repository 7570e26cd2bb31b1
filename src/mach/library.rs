use super::{Function, Runtime, Val};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// A system command receives exactly its declared number of arguments
/// and answers any number of values for the result queue.
pub type Command = fn(&mut Runtime, &[Val]) -> Result<Vec<Val>>;

/// ## System command library
///
/// The runtime looks commands up by the name a program spells out in
/// memory. A pair of libraries is a library that asks the first one
/// before the second, which is how a device module layers over the
/// builtins.
pub trait Library {
    fn command(&self, name: &str) -> Option<(usize, Command)>;
}

impl<A: Library, B: Library> Library for (A, B) {
    fn command(&self, name: &str) -> Option<(usize, Command)> {
        self.0.command(name).or_else(|| self.1.command(name))
    }
}

/// Math, character classification, random numbers, and timing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Builtins;

impl Library for Builtins {
    fn command(&self, name: &str) -> Option<(usize, Command)> {
        Function::command(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Device;

    fn answer(_: &mut Runtime, _: &[Val]) -> Result<Vec<Val>> {
        Ok(vec![Val::Integer(42)])
    }

    impl Library for Device {
        fn command(&self, name: &str) -> Option<(usize, Command)> {
            match name {
                "abs" | "answer" => Some((0, answer as Command)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_pair_asks_first_library_first() {
        let lib = (Device, Builtins);
        assert_eq!(lib.command("abs").map(|(arity, _)| arity), Some(0));
        assert_eq!(lib.command("sqrt").map(|(arity, _)| arity), Some(1));
        assert!(lib.command("nope").is_none());
    }
}
