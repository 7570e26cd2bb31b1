use super::Location;

/// Every Minim error is fatal. The stage records which part of the
/// pipeline gave up.
#[derive(Clone, PartialEq)]
pub struct Error {
    stage: Stage,
    location: Option<Location>,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
    Runtime,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($stage:ident; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::Stage::$stage).message(format!($($msg)+))
    };
    ($stage:ident, $loc:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::Stage::$stage)
            .in_location($loc)
            .message(format!($($msg)+))
    };
}

impl Error {
    pub fn new(stage: Stage) -> Error {
        Error {
            stage,
            location: None,
            message: String::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Attaches a location unless one is already known. The innermost
    /// location is the most precise, so it always wins.
    pub fn in_location(self, location: &Location) -> Error {
        if self.location.is_some() {
            return self;
        }
        Error {
            location: Some(location.clone()),
            ..self
        }
    }

    pub fn message(self, message: String) -> Error {
        Error { message, ..self }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stage::Lexer => write!(f, "Lexer"),
            Stage::Parser => write!(f, "Parser"),
            Stage::Runtime => write!(f, "Runtime"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} Error @ {} :: {}", self.stage, location, self.message),
            None => write!(f, "{} Error :: {}", self.stage, self.message),
        }
    }
}

impl std::error::Error for Error {}
