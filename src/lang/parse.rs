use super::ast::*;
use super::token::{Symbol, Tag, Token};
use super::{Error, Location};

type Result<T> = std::result::Result<T, Error>;

/// Parses a token stream ending in `Tag::Eof` into a flat statement list.
pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>> {
    match tokens.last() {
        Some(last) => Parser::parse(tokens, last),
        None => Ok(vec![]),
    }
}

struct Parser<'a> {
    token_stream: std::iter::Peekable<std::slice::Iter<'a, Token>>,
    last: &'a Token,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token], last: &'a Token) -> Result<Vec<Statement>> {
        let mut parse = Parser {
            token_stream: tokens.iter().peekable(),
            last,
        };
        let mut r: Vec<Statement> = vec![];
        loop {
            if let Tag::Eof = parse.peek().tag {
                return Ok(r);
            }
            r.push(parse.statement()?);
        }
    }

    fn next(&mut self) -> &'a Token {
        self.token_stream.next().unwrap_or(self.last)
    }

    fn peek(&mut self) -> &'a Token {
        self.token_stream.peek().copied().unwrap_or(self.last)
    }

    fn check(&mut self, symbol: Symbol) -> bool {
        self.peek().is(symbol)
    }

    fn accept(&mut self, symbol: Symbol) -> bool {
        if self.check(symbol) {
            self.next();
            return true;
        }
        false
    }

    fn expect(&mut self, symbol: Symbol) -> Result<&'a Token> {
        let token = self.next();
        if token.is(symbol) {
            return Ok(token);
        }
        Err(unexpected(token, &format!("`{}`", symbol)))
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = self.peek();
        let location = token.location.clone();
        let statement = match token.tag {
            Tag::Symbol(Symbol::End) => Statement::Empty(location),
            Tag::Symbol(Symbol::Hash) => {
                self.next();
                self.number_io(location)?
            }
            Tag::Symbol(Symbol::Dollar) => {
                self.next();
                self.text_io(location)?
            }
            Tag::Symbol(Symbol::Underscore) => {
                self.next();
                self.label(location)?
            }
            Tag::Symbol(Symbol::At) => {
                self.next();
                self.system(location)?
            }
            Tag::Symbol(Symbol::BitAnd) => {
                self.next();
                self.memory(location)?
            }
            _ => self.expression_statement(location)?,
        };
        self.expect(Symbol::End)?;
        Ok(statement)
    }

    fn number_io(&mut self, location: Location) -> Result<Statement> {
        let direction = self.next();
        Ok(match direction.tag {
            Tag::Symbol(Symbol::Less) => {
                Statement::NumberOut(location, Mode::Plain, self.expression()?)
            }
            Tag::Symbol(Symbol::Shl) => {
                Statement::NumberOut(location, Mode::Integer, self.expression()?)
            }
            Tag::Symbol(Symbol::Greater) => {
                Statement::NumberIn(location, Mode::Plain, self.expression()?)
            }
            Tag::Symbol(Symbol::Shr) => {
                Statement::NumberIn(location, Mode::Integer, self.expression()?)
            }
            _ => return Err(unexpected(direction, "`<`, `<<`, `>` or `>>`")),
        })
    }

    fn text_io(&mut self, location: Location) -> Result<Statement> {
        let direction = self.next();
        Ok(match direction.tag {
            Tag::Symbol(Symbol::Less) => Statement::TextOut(location, self.expression()?),
            Tag::Symbol(Symbol::Greater) => Statement::TextIn(location, self.expression()?),
            Tag::Symbol(Symbol::Bang) => Statement::TextFlush(location),
            _ => return Err(unexpected(direction, "`<`, `>` or `!`")),
        })
    }

    fn label(&mut self, location: Location) -> Result<Statement> {
        let direction = self.next();
        Ok(match direction.tag {
            Tag::Symbol(Symbol::Greater) => Statement::Label(location, self.expression()?),
            Tag::Symbol(Symbol::Less) => {
                let id = self.expression()?;
                Statement::Goto(location, id, self.fallback()?)
            }
            Tag::Symbol(Symbol::Question) => Statement::Jump(location, self.expression()?),
            Tag::Symbol(Symbol::Shl) => {
                let id = self.expression()?;
                Statement::Gosub(location, id, self.fallback()?)
            }
            Tag::Symbol(Symbol::Shr) => Statement::Return(location),
            _ => return Err(unexpected(direction, "`>`, `<`, `?`, `<<` or `>>`")),
        })
    }

    fn fallback(&mut self) -> Result<Expression> {
        if self.accept(Symbol::Comma) {
            return self.expression();
        }
        Ok(Expression::None(self.peek().location.clone()))
    }

    fn system(&mut self, location: Location) -> Result<Statement> {
        let direction = self.next();
        Ok(match direction.tag {
            Tag::Symbol(Symbol::Less) => Statement::SystemArg(location, self.expression()?),
            Tag::Symbol(Symbol::Greater) => {
                Statement::SystemCall(location, self.optional(&[Symbol::End])?)
            }
            Tag::Symbol(Symbol::Bang) => Statement::SystemFlush(location),
            _ => return Err(unexpected(direction, "`<`, `>` or `!`")),
        })
    }

    fn memory(&mut self, location: Location) -> Result<Statement> {
        let direction = self.next();
        Ok(match direction.tag {
            Tag::Symbol(Symbol::Plus) => Statement::MemoryPush(location),
            Tag::Symbol(Symbol::Minus) => Statement::MemoryPop(location),
            Tag::Symbol(Symbol::Less) => Statement::MemoryOut(location, self.expression()?),
            Tag::Symbol(Symbol::Greater) => Statement::MemoryIn(location, self.expression()?),
            Tag::Symbol(Symbol::Bang) => Statement::MemoryFlush(location),
            _ => return Err(unexpected(direction, "`+`, `-`, `<`, `>` or `!`")),
        })
    }

    fn expression_statement(&mut self, location: Location) -> Result<Statement> {
        let expr = self.expression()?;
        Ok(match expr {
            Expression::Binary(op_location, Binary::Assign, lhs, rhs) => match *lhs {
                Expression::Single(_, index) => Statement::SingleAssign(location, *index, *rhs),
                Expression::FixedRange(_, start, end, step) => {
                    Statement::FixedAssign(location, *start, *end, *step, *rhs)
                }
                Expression::RelativeRange(_, start, count, step) => {
                    Statement::RelativeAssign(location, *start, *count, *step, *rhs)
                }
                lhs => Statement::Expression(
                    location,
                    Expression::Binary(op_location, Binary::Assign, Box::new(lhs), rhs),
                ),
            },
            expr => Statement::Expression(location, expr),
        })
    }

    fn optional(&mut self, terminators: &[Symbol]) -> Result<Expression> {
        let token = self.peek();
        if terminators.iter().any(|s| token.is(*s)) {
            return Ok(Expression::None(token.location.clone()));
        }
        self.expression()
    }

    fn expression(&mut self) -> Result<Expression> {
        let lhs = self.ternary()?;
        let token = self.peek();
        if let Some(op) = assignment_op(token) {
            self.next();
            let rhs = self.expression()?;
            return Ok(Expression::Binary(
                token.location.clone(),
                op,
                Box::new(lhs),
                Box::new(rhs),
            ));
        }
        Ok(lhs)
    }

    fn ternary(&mut self) -> Result<Expression> {
        let test = self.binary(1)?;
        if !self.check(Symbol::Question) {
            return Ok(test);
        }
        let location = self.next().location.clone();
        let yes = self.ternary()?;
        self.expect(Symbol::Colon)?;
        let no = self.ternary()?;
        Ok(Expression::Ternary(
            location,
            Box::new(test),
            Box::new(yes),
            Box::new(no),
        ))
    }

    fn binary(&mut self, precedence: usize) -> Result<Expression> {
        let mut lhs = self.prefix()?;
        loop {
            let token = self.peek();
            let (op, op_precedence) = match binary_op(token) {
                Some(found) => found,
                None => break,
            };
            if op_precedence < precedence {
                break;
            }
            self.next();
            let rhs = self.binary(op_precedence + 1)?;
            lhs = Expression::Binary(token.location.clone(), op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn prefix(&mut self) -> Result<Expression> {
        let token = self.peek();
        let op = match token.tag {
            Tag::Symbol(Symbol::Minus) => Prefix::Negate,
            Tag::Symbol(Symbol::Bang) => Prefix::Not,
            Tag::Symbol(Symbol::BangBang) => Prefix::Narrow,
            Tag::Symbol(Symbol::Tilde) => Prefix::Invert,
            Tag::Symbol(Symbol::PlusPlus) => Prefix::Increment,
            Tag::Symbol(Symbol::MinusMinus) => Prefix::Decrement,
            _ => return self.postfix(),
        };
        self.next();
        let operand = self.prefix()?;
        Ok(Expression::Prefix(token.location.clone(), op, Box::new(operand)))
    }

    fn postfix(&mut self) -> Result<Expression> {
        let mut expr = self.terminal()?;
        loop {
            let token = self.peek();
            let op = match token.tag {
                Tag::Symbol(Symbol::PlusPlus) => Postfix::Increment,
                Tag::Symbol(Symbol::MinusMinus) => Postfix::Decrement,
                Tag::Symbol(Symbol::BangBang) => Postfix::Narrow,
                Tag::Symbol(Symbol::Bang) => Postfix::Toggle,
                Tag::Symbol(Symbol::Tilde) => Postfix::Invert,
                Tag::Symbol(Symbol::CastFloat) => Postfix::CastFloat,
                Tag::Symbol(Symbol::CastInt) => Postfix::CastInt,
                Tag::Symbol(Symbol::CastString) => Postfix::CastString,
                _ => return Ok(expr),
            };
            self.next();
            expr = Expression::Postfix(token.location.clone(), Box::new(expr), op);
        }
    }

    fn terminal(&mut self) -> Result<Expression> {
        let token = self.next();
        let location = token.location.clone();
        match token.tag {
            Tag::Number(val) => Ok(Expression::Number(location, val)),
            Tag::Dynamic(selector) => {
                let dynamic = match selector {
                    'a' => Dynamic::Arguments,
                    'c' => Dynamic::Counter,
                    'r' => Dynamic::Random,
                    'm' => Dynamic::ScopeSize,
                    _ => return Err(unexpected(token, "an expression")),
                };
                Ok(Expression::Dynamic(location, dynamic))
            }
            Tag::Symbol(Symbol::LParen) => {
                let expr = self.expression()?;
                self.expect(Symbol::RParen)?;
                Ok(expr)
            }
            Tag::Symbol(Symbol::LBracket) => self.address(location),
            Tag::Symbol(Symbol::LBrace) => self.array(location),
            _ => Err(unexpected(token, "an expression")),
        }
    }

    /// Everything between `[` and `]`: a single cell, a fixed range
    /// `start:end:step`, or a relative range `start:+count:step`.
    fn address(&mut self, location: Location) -> Result<Expression> {
        let start = if self.check(Symbol::Colon) || self.check(Symbol::Relative) {
            Expression::None(location.clone())
        } else {
            self.expression()?
        };
        if self.accept(Symbol::Colon) {
            let end = self.optional(&[Symbol::Colon, Symbol::RBracket])?;
            let step = self.step()?;
            self.expect(Symbol::RBracket)?;
            return Ok(Expression::FixedRange(
                location,
                Box::new(start),
                Box::new(end),
                Box::new(step),
            ));
        }
        if self.check(Symbol::Relative) {
            let marker = self.next();
            if self.check(Symbol::Colon) || self.check(Symbol::RBracket) {
                return Err(error!(Parser, &marker.location; "relative range requires a count"));
            }
            let count = self.expression()?;
            let step = self.step()?;
            self.expect(Symbol::RBracket)?;
            return Ok(Expression::RelativeRange(
                location,
                Box::new(start),
                Box::new(count),
                Box::new(step),
            ));
        }
        self.expect(Symbol::RBracket)?;
        Ok(Expression::Single(location, Box::new(start)))
    }

    fn step(&mut self) -> Result<Expression> {
        if self.accept(Symbol::Colon) {
            return self.optional(&[Symbol::RBracket]);
        }
        Ok(Expression::None(self.peek().location.clone()))
    }

    fn array(&mut self, location: Location) -> Result<Expression> {
        let mut elements: Vec<Expression> = vec![];
        if self.accept(Symbol::RBrace) {
            return Ok(Expression::Array(location, elements));
        }
        loop {
            let element = self.expression()?;
            if let Expression::Array(nested, _) = &element {
                return Err(error!(Parser, nested; "array literals cannot be nested"));
            }
            elements.push(element);
            let token = self.next();
            match token.tag {
                Tag::Symbol(Symbol::Comma) => continue,
                Tag::Symbol(Symbol::RBrace) => return Ok(Expression::Array(location, elements)),
                _ => return Err(unexpected(token, "`,` or `}`")),
            }
        }
    }
}

fn unexpected(token: &Token, expected: &str) -> Error {
    match token.tag {
        Tag::Eof => error!(Parser, &token.location; "expected {}, found end of file", expected),
        _ => error!(Parser, &token.location; "expected {}, found `{}`", expected, token),
    }
}

fn assignment_op(token: &Token) -> Option<Binary> {
    let symbol = match token.tag {
        Tag::Symbol(symbol) => symbol,
        _ => return None,
    };
    use Symbol::*;
    Some(match symbol {
        Assign => Binary::Assign,
        AddAssign => Binary::AddAssign,
        SubAssign => Binary::SubAssign,
        MulAssign => Binary::MulAssign,
        DivAssign => Binary::DivAssign,
        ModAssign => Binary::ModAssign,
        AndAssign => Binary::AndAssign,
        OrAssign => Binary::OrAssign,
        XorAssign => Binary::XorAssign,
        ShlAssign => Binary::ShlAssign,
        ShrAssign => Binary::ShrAssign,
        UshrAssign => Binary::UshrAssign,
        _ => return None,
    })
}

/// Binary operator and its precedence, loosest first.
fn binary_op(token: &Token) -> Option<(Binary, usize)> {
    let symbol = match token.tag {
        Tag::Symbol(symbol) => symbol,
        _ => return None,
    };
    use Symbol::*;
    Some(match symbol {
        LogicOr => (Binary::LogicOr, 1),
        BitOr => (Binary::BitOr, 1),
        LogicXor => (Binary::LogicXor, 2),
        BitXor => (Binary::BitXor, 2),
        LogicAnd => (Binary::LogicAnd, 3),
        BitAnd => (Binary::BitAnd, 3),
        Equal => (Binary::Equal, 4),
        NotEqual => (Binary::NotEqual, 4),
        Less => (Binary::Less, 5),
        LessEqual => (Binary::LessEqual, 5),
        Greater => (Binary::Greater, 5),
        GreaterEqual => (Binary::GreaterEqual, 5),
        Shl => (Binary::Shl, 6),
        Shr => (Binary::Shr, 6),
        Ushr => (Binary::Ushr, 6),
        Plus => (Binary::Add, 7),
        Minus => (Binary::Sub, 7),
        Star => (Binary::Mul, 8),
        Slash => (Binary::Div, 8),
        Percent => (Binary::Mod, 8),
        _ => return None,
    })
}
