use super::Location;
use crate::mach::Val;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_SYMBOL: HashMap<&'static str, Symbol> =
        Symbol::ALL.iter().map(|s| (s.as_str(), *s)).collect();
);

/// Longest spelling of any fixed symbol; the lexer never looks further ahead.
pub const MAX_SYMBOL_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub location: Location,
    pub tag: Tag,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Symbol(Symbol),
    Number(Val),
    Dynamic(char),
    Eof,
}

impl Token {
    pub fn new(location: Location, tag: Tag) -> Token {
        Token { location, tag }
    }

    pub fn is(&self, symbol: Symbol) -> bool {
        self.tag == Tag::Symbol(symbol)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tag::Symbol(s) => write!(f, "{}", s),
            Tag::Number(v) => write!(f, "{}", v),
            Tag::Dynamic(c) => write!(f, "{}", c),
            Tag::Eof => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    End,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Question,
    Colon,
    Relative,
    Hash,
    Dollar,
    Underscore,
    At,
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
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    BangBang,
    Tilde,
    PlusPlus,
    MinusMinus,
    CastFloat,
    CastInt,
    CastString,
}

impl Symbol {
    pub const ALL: [Symbol; 55] = {
        use Symbol::*;
        [
            End, Comma, LParen, RParen, LBracket, RBracket, LBrace, RBrace, Question, Colon,
            Relative, Hash, Dollar, Underscore, At, Assign, AddAssign, SubAssign, MulAssign,
            DivAssign, ModAssign, AndAssign, OrAssign, XorAssign, ShlAssign, ShrAssign,
            UshrAssign, LogicOr, LogicXor, LogicAnd, BitOr, BitXor, BitAnd, Equal, NotEqual,
            Less, LessEqual, Greater, GreaterEqual, Shl, Shr, Ushr, Plus, Minus, Star, Slash,
            Percent, Bang, BangBang, Tilde, PlusPlus, MinusMinus, CastFloat, CastInt,
            CastString,
        ]
    };

    pub fn from_string(s: &str) -> Option<Symbol> {
        STRING_TO_SYMBOL.with(|sts| sts.get(s).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use Symbol::*;
        match self {
            End => ".",
            Comma => ",",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            Question => "?",
            Colon => ":",
            Relative => ":+",
            Hash => "#",
            Dollar => "$",
            Underscore => "_",
            At => "@",
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
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Bang => "!",
            BangBang => "!!",
            Tilde => "~",
            PlusPlus => "++",
            MinusMinus => "--",
            CastFloat => ":f",
            CastInt => ":i",
            CastString => ":s",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Symbol::from_string(">>>="), Some(Symbol::UshrAssign));
        assert_eq!(Symbol::from_string(":+"), Some(Symbol::Relative));
        assert_eq!(Symbol::from_string("=>"), None);
    }

    #[test]
    fn test_spellings_are_unique() {
        for symbol in Symbol::ALL.iter() {
            assert_eq!(Symbol::from_string(symbol.as_str()), Some(*symbol));
            assert!(symbol.as_str().len() <= MAX_SYMBOL_LEN);
        }
    }
}
