use crate::lang::ast::Statement;
use crate::lang::{lex, parse, Error};
use std::rc::Rc;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled program
///
/// The statement list is shared with the runtime and never changes
/// after parsing.

#[derive(Debug, Clone)]
pub struct Program {
    statements: Rc<[Statement]>,
}

impl Program {
    pub fn compile(source_name: &str, text: &str) -> Result<Program> {
        let tokens = lex(source_name, text)?;
        let statements = parse(&tokens)?;
        debug!(
            source = source_name,
            tokens = tokens.len(),
            statements = statements.len(),
            "compiled"
        );
        Ok(Program {
            statements: statements.into(),
        })
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub(super) fn shared(&self) -> Rc<[Statement]> {
        Rc::clone(&self.statements)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Default for Program {
    fn default() -> Self {
        Program {
            statements: Rc::from(Vec::new()),
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for statement in self.statements.iter() {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
