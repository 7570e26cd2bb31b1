use super::Location;
use crate::mach::Val;

/// Statements form a flat list. Control flow is the counter, never nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    NumberOut(Location, Mode, Expression),
    NumberIn(Location, Mode, Expression),
    TextOut(Location, Expression),
    TextIn(Location, Expression),
    TextFlush(Location),
    Label(Location, Expression),
    Goto(Location, Expression, Expression),
    Jump(Location, Expression),
    Gosub(Location, Expression, Expression),
    Return(Location),
    SystemArg(Location, Expression),
    SystemCall(Location, Expression),
    SystemFlush(Location),
    MemoryPush(Location),
    MemoryPop(Location),
    MemoryOut(Location, Expression),
    MemoryIn(Location, Expression),
    MemoryFlush(Location),
    SingleAssign(Location, Expression, Expression),
    FixedAssign(Location, Expression, Expression, Expression, Expression),
    RelativeAssign(Location, Expression, Expression, Expression, Expression),
    Expression(Location, Expression),
    Empty(Location),
}

/// Number I/O either keeps the value's own kind or forces an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Plain,
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Marks an omitted optional part, like a range bound.
    None(Location),
    Number(Location, Val),
    Dynamic(Location, Dynamic),
    Prefix(Location, Prefix, Box<Expression>),
    Postfix(Location, Box<Expression>, Postfix),
    Binary(Location, Binary, Box<Expression>, Box<Expression>),
    Ternary(Location, Box<Expression>, Box<Expression>, Box<Expression>),
    Array(Location, Vec<Expression>),
    Single(Location, Box<Expression>),
    FixedRange(Location, Box<Expression>, Box<Expression>, Box<Expression>),
    RelativeRange(Location, Box<Expression>, Box<Expression>, Box<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dynamic {
    Arguments,
    Counter,
    Random,
    ScopeSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Negate,
    Not,
    Narrow,
    Invert,
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Postfix {
    Increment,
    Decrement,
    Narrow,
    Toggle,
    Invert,
    CastFloat,
    CastInt,
    CastString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    UshrAssign,
    LogicOr,
    LogicXor,
    LogicAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Shl,
    Shr,
    Ushr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Binary {
    pub fn is_assignment(self) -> bool {
        self == Binary::Assign || self.compound().is_some()
    }

    /// The operator a compound assignment applies before storing.
    pub fn compound(self) -> Option<Binary> {
        use Binary::*;
        match self {
            AddAssign => Some(Add),
            SubAssign => Some(Sub),
            MulAssign => Some(Mul),
            DivAssign => Some(Div),
            ModAssign => Some(Mod),
            AndAssign => Some(BitAnd),
            OrAssign => Some(BitOr),
            XorAssign => Some(BitXor),
            ShlAssign => Some(Shl),
            ShrAssign => Some(Shr),
            UshrAssign => Some(Ushr),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        use Binary::*;
        match self {
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            ModAssign => "%=",
            AndAssign => "&=",
            OrAssign => "|=",
            XorAssign => "^=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            UshrAssign => ">>>=",
            LogicOr => "||",
            LogicXor => "^^",
            LogicAnd => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Shl => "<<",
            Shr => ">>",
            Ushr => ">>>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
        }
    }
}

impl Expression {
    pub fn location(&self) -> &Location {
        use Expression::*;
        match self {
            None(loc)
            | Number(loc, _)
            | Dynamic(loc, _)
            | Prefix(loc, ..)
            | Postfix(loc, ..)
            | Binary(loc, ..)
            | Ternary(loc, ..)
            | Array(loc, _)
            | Single(loc, _)
            | FixedRange(loc, ..)
            | RelativeRange(loc, ..) => loc,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Expression::None(_))
    }
}

impl Statement {
    pub fn location(&self) -> &Location {
        use Statement::*;
        match self {
            NumberOut(loc, ..)
            | NumberIn(loc, ..)
            | TextOut(loc, _)
            | TextIn(loc, _)
            | TextFlush(loc)
            | Label(loc, _)
            | Goto(loc, ..)
            | Jump(loc, _)
            | Gosub(loc, ..)
            | Return(loc)
            | SystemArg(loc, _)
            | SystemCall(loc, _)
            | SystemFlush(loc)
            | MemoryPush(loc)
            | MemoryPop(loc)
            | MemoryOut(loc, _)
            | MemoryIn(loc, _)
            | MemoryFlush(loc)
            | SingleAssign(loc, ..)
            | FixedAssign(loc, ..)
            | RelativeAssign(loc, ..)
            | Expression(loc, _)
            | Empty(loc) => loc,
        }
    }
}

impl std::fmt::Display for Dynamic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Dynamic::Arguments => write!(f, "a"),
            Dynamic::Counter => write!(f, "c"),
            Dynamic::Random => write!(f, "r"),
            Dynamic::ScopeSize => write!(f, "m"),
        }
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Prefix::*;
        match self {
            Negate => write!(f, "-"),
            Not => write!(f, "!"),
            Narrow => write!(f, "!!"),
            Invert => write!(f, "~"),
            Increment => write!(f, "++"),
            Decrement => write!(f, "--"),
        }
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Postfix::*;
        match self {
            Increment => write!(f, "++"),
            Decrement => write!(f, "--"),
            Narrow => write!(f, "!!"),
            Toggle => write!(f, "!"),
            Invert => write!(f, "~"),
            CastFloat => write!(f, ":f"),
            CastInt => write!(f, ":i"),
            CastString => write!(f, ":s"),
        }
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn write_number(f: &mut std::fmt::Formatter, val: &Val) -> std::fmt::Result {
    match val {
        Val::Integer(i) => write!(f, "{}", i),
        Val::Float(n) if n.is_nan() => write!(f, "N"),
        Val::Float(n) if n.is_infinite() && *n > 0.0 => write!(f, "I"),
        Val::Float(n) if n.is_infinite() => write!(f, "-I"),
        Val::Float(n) => {
            let s = n.to_string();
            if s.contains('.') {
                write!(f, "{}", s)
            } else {
                write!(f, "{}.0", s)
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            None(_) => Ok(()),
            Number(_, val) => write_number(f, val),
            Dynamic(_, dynamic) => write!(f, "{}", dynamic),
            Prefix(_, op, expr) if matches!(**expr, Prefix(..)) => write!(f, "{}({})", op, expr),
            Prefix(_, op, expr) => write!(f, "{}{}", op, expr),
            Postfix(_, expr, op) if matches!(**expr, Prefix(..)) => write!(f, "({}){}", expr, op),
            Postfix(_, expr, op) => write!(f, "{}{}", expr, op),
            Binary(_, op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Ternary(_, test, yes, no) => write!(f, "({} ? {} : {})", test, yes, no),
            Array(_, elements) => {
                write!(f, "{{")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "}}")
            }
            Single(_, index) => write!(f, "[{}]", index),
            FixedRange(_, start, end, step) => {
                if step.is_none() {
                    write!(f, "[{}:{}]", start, end)
                } else {
                    write!(f, "[{}:{}:{}]", start, end, step)
                }
            }
            RelativeRange(_, start, count, step) => {
                if step.is_none() {
                    write!(f, "[{}:+{}]", start, count)
                } else {
                    write!(f, "[{}:+{}:{}]", start, count, step)
                }
            }
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        fn mode(m: &Mode, plain: &'static str, int: &'static str) -> &'static str {
            match m {
                Mode::Plain => plain,
                Mode::Integer => int,
            }
        }
        fn with_fallback(
            f: &mut std::fmt::Formatter,
            marker: &str,
            id: &super::ast::Expression,
            fallback: &super::ast::Expression,
        ) -> std::fmt::Result {
            if fallback.is_none() {
                write!(f, "{} {}.", marker, id)
            } else {
                write!(f, "{} {}, {}.", marker, id, fallback)
            }
        }
        match self {
            NumberOut(_, m, expr) => write!(f, "{} {}.", mode(m, "#<", "#<<"), expr),
            NumberIn(_, m, expr) => write!(f, "{} {}.", mode(m, "#>", "#>>"), expr),
            TextOut(_, expr) => write!(f, "$< {}.", expr),
            TextIn(_, expr) => write!(f, "$> {}.", expr),
            TextFlush(_) => write!(f, "$!."),
            Label(_, expr) => write!(f, "_> {}.", expr),
            Goto(_, id, fallback) => with_fallback(f, "_<", id, fallback),
            Jump(_, expr) => write!(f, "_? {}.", expr),
            Gosub(_, id, fallback) => with_fallback(f, "_<<", id, fallback),
            Return(_) => write!(f, "_>>."),
            SystemArg(_, expr) => write!(f, "@< {}.", expr),
            SystemCall(_, expr) if expr.is_none() => write!(f, "@>."),
            SystemCall(_, expr) => write!(f, "@> {}.", expr),
            SystemFlush(_) => write!(f, "@!."),
            MemoryPush(_) => write!(f, "&+."),
            MemoryPop(_) => write!(f, "&-."),
            MemoryOut(_, expr) => write!(f, "&< {}.", expr),
            MemoryIn(_, expr) => write!(f, "&> {}.", expr),
            MemoryFlush(_) => write!(f, "&!."),
            SingleAssign(_, index, value) => write!(f, "[{}] = {}.", index, value),
            FixedAssign(_, start, end, step, value) => {
                if step.is_none() {
                    write!(f, "[{}:{}] = {}.", start, end, value)
                } else {
                    write!(f, "[{}:{}:{}] = {}.", start, end, step, value)
                }
            }
            RelativeAssign(_, start, count, step, value) => {
                if step.is_none() {
                    write!(f, "[{}:+{}] = {}.", start, count, value)
                } else {
                    write!(f, "[{}:+{}:{}] = {}.", start, count, step, value)
                }
            }
            Expression(_, expr) => write!(f, "{}.", expr),
            Empty(_) => write!(f, "."),
        }
    }
}
