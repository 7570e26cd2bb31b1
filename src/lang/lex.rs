use super::token::{Symbol, Tag, Token, MAX_SYMBOL_LEN};
use super::{Error, Location};
use crate::mach::Val;
use std::collections::VecDeque;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const COMMENT: char = ';';

/// Converts source text into tokens. The last token is always `Tag::Eof`.
pub fn lex(source_name: &str, text: &str) -> Result<Vec<Token>> {
    MinimLexer::new(source_name, text).collect()
}

struct MinimLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    source: Rc<str>,
    row: usize,
    col: usize,
    pending: VecDeque<Token>,
    done: bool,
}

impl<'a> Iterator for MinimLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(Ok(token));
        }
        if self.done {
            return None;
        }
        self.skip_trivia();
        let location = self.location();
        let pk = match self.chars.peek() {
            Some(pk) => *pk,
            None => {
                self.done = true;
                return Some(Ok(Token::new(location, Tag::Eof)));
            }
        };
        let token = if pk.is_ascii_digit() {
            self.number(location)
        } else if pk == '\'' {
            self.character(location)
        } else if pk == '"' {
            self.string(location)
        } else if pk.is_ascii_alphabetic() {
            self.letter(location)
        } else {
            self.symbol(location)
        };
        if token.is_err() {
            self.done = true;
        }
        Some(token)
    }
}

impl<'a> MinimLexer<'a> {
    fn new(source_name: &str, text: &'a str) -> MinimLexer<'a> {
        MinimLexer {
            chars: text.chars().peekable(),
            source: source_name.into(),
            row: 1,
            col: 1,
            pending: VecDeque::new(),
            done: false,
        }
    }

    fn location(&self) -> Location {
        Location::new(&self.source, self.row, self.col)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn second(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    fn skip_trivia(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if pk.is_whitespace() {
                self.bump();
            } else if *pk == COMMENT {
                self.comment();
            } else {
                break;
            }
        }
    }

    fn comment(&mut self) {
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => {
                    self.bump();
                }
                '\n' => break,
                _ => {}
            }
        }
    }

    fn digits(&mut self, s: &mut String) {
        while let Some(pk) = self.chars.peek() {
            if !pk.is_ascii_digit() {
                break;
            }
            if let Some(ch) = self.bump() {
                s.push(ch);
            }
        }
    }

    fn number(&mut self, location: Location) -> Result<Token> {
        let mut s = String::new();
        let mut float = false;
        self.digits(&mut s);
        // A '.' not followed by a digit ends the statement instead.
        if self.chars.peek() == Some(&'.') && self.second().map_or(false, |c| c.is_ascii_digit()) {
            float = true;
            s.push('.');
            self.bump();
            self.digits(&mut s);
        }
        if matches!(self.chars.peek(), Some('e') | Some('E'))
            && self.second().map_or(false, |c| c.is_ascii_digit())
        {
            float = true;
            s.push('e');
            self.bump();
            self.digits(&mut s);
        }
        if !float {
            if let Ok(i) = s.parse::<i32>() {
                return Ok(Token::new(location, Tag::Number(Val::Integer(i))));
            }
        }
        match s.parse::<f32>() {
            Ok(f) => Ok(Token::new(location, Tag::Number(Val::Float(f)))),
            Err(_) => Err(error!(Lexer, &location; "invalid number literal `{}`", s)),
        }
    }

    fn hex(&mut self, len: usize, location: &Location) -> Result<u32> {
        let mut s = String::new();
        while s.len() < len {
            match self.chars.peek() {
                Some(pk) if pk.is_ascii_hexdigit() => s.push(*pk),
                _ => break,
            }
            self.bump();
        }
        if s.len() != len {
            return Err(error!(Lexer, location; "invalid escape sequence `{}`", s));
        }
        u32::from_str_radix(&s, 16)
            .map_err(|_| error!(Lexer, location; "invalid escape sequence `{}`", s))
    }

    fn escape(&mut self, location: &Location) -> Result<u32> {
        let ch = match self.bump() {
            Some(ch) => ch,
            None => return Err(error!(Lexer, location; "unterminated escape sequence")),
        };
        Ok(match ch {
            '\\' => 0x5C,
            '\'' => 0x27,
            '"' => 0x22,
            '0' => 0x00,
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0C,
            'n' => 0x0A,
            'r' => 0x0D,
            't' => 0x09,
            'v' => 0x0B,
            'u' => self.hex(4, location)?,
            'x' => self.hex(2, location)?,
            _ => return Err(error!(Lexer, location; "invalid escape sequence `\\{}`", ch)),
        })
    }

    fn character(&mut self, location: Location) -> Result<Token> {
        self.bump();
        let escape_at = self.location();
        let code = match self.bump() {
            Some('\\') => self.escape(&escape_at)?,
            Some('\'') => return Err(error!(Lexer, &location; "empty character literal")),
            Some(ch) => ch as u32,
            None => return Err(error!(Lexer, &location; "unterminated character literal")),
        };
        if self.bump() != Some('\'') {
            return Err(error!(Lexer, &location; "unterminated character literal"));
        }
        Ok(Token::new(location, Tag::Number(Val::Integer(code as i32))))
    }

    /// Strings never reach the parser. They become the array literal
    /// `{c1,c2,...,0}` right here.
    fn string(&mut self, location: Location) -> Result<Token> {
        self.bump();
        let mut codes: Vec<u32> = vec![];
        loop {
            let escape_at = self.location();
            match self.bump() {
                Some('"') => break,
                Some('\\') => codes.push(self.escape(&escape_at)?),
                Some(ch) => codes.push(ch as u32),
                None => return Err(error!(Lexer, &location; "unterminated string literal")),
            }
        }
        let symbol = |s: Symbol| Token::new(location.clone(), Tag::Symbol(s));
        let number = |c: u32| Token::new(location.clone(), Tag::Number(Val::Integer(c as i32)));
        for code in codes {
            self.pending.push_back(number(code));
            self.pending.push_back(symbol(Symbol::Comma));
        }
        self.pending.push_back(number(0));
        self.pending.push_back(symbol(Symbol::RBrace));
        Ok(symbol(Symbol::LBrace))
    }

    fn letter(&mut self, location: Location) -> Result<Token> {
        let ch = match self.bump() {
            Some(ch) => ch,
            None => return Err(error!(Lexer, &location; "unexpected end of input")),
        };
        let tag = match ch {
            'T' => Tag::Number(Val::Integer(1)),
            'F' => Tag::Number(Val::Integer(0)),
            'N' => Tag::Number(Val::Float(f32::NAN)),
            'I' => Tag::Number(Val::Float(f32::INFINITY)),
            'P' => Tag::Number(Val::Float(std::f32::consts::PI)),
            'E' => Tag::Number(Val::Float(std::f32::consts::E)),
            'a' | 'c' | 'r' | 'm' => Tag::Dynamic(ch),
            _ => return Err(error!(Lexer, &location; "invalid character `{}`", ch)),
        };
        Ok(Token::new(location, tag))
    }

    fn symbol(&mut self, location: Location) -> Result<Token> {
        let ahead: Vec<char> = self.chars.clone().take(MAX_SYMBOL_LEN).collect();
        for len in (1..=ahead.len()).rev() {
            let candidate: String = ahead[..len].iter().collect();
            if let Some(symbol) = Symbol::from_string(&candidate) {
                for _ in 0..len {
                    self.bump();
                }
                return Ok(Token::new(location, Tag::Symbol(symbol)));
            }
        }
        let ch = ahead.first().copied().unwrap_or_default();
        Err(error!(Lexer, &location; "invalid character `{}`", ch))
    }
}
