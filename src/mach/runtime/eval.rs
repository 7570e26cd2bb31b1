use super::Runtime;
use crate::error;
use crate::lang::ast::{Binary, Dynamic, Expression, Postfix, Prefix};
use crate::lang::Error;
use crate::mach::{Operand, Operation, Ref, Val};

type Result<T> = std::result::Result<T, Error>;

type BinaryFn = fn(Val, Val) -> Result<Val>;

impl Runtime {
    /// Errors carry the location of the innermost failing expression.
    pub(super) fn evaluate(&mut self, expr: &Expression) -> Result<Operand> {
        self.evaluate_inner(expr)
            .map_err(|error| error.in_location(expr.location()))
    }

    /// Evaluates to a scalar; arrays are an error.
    pub(super) fn value_of(&mut self, expr: &Expression) -> Result<Val> {
        let operand = self.evaluate(expr)?;
        self.value(&operand)
            .map_err(|error| error.in_location(expr.location()))
    }

    fn evaluate_inner(&mut self, expr: &Expression) -> Result<Operand> {
        match expr {
            Expression::None(_) => Err(error!(Runtime; "missing expression")),
            Expression::Number(_, val) => Ok(Operand::Value(*val)),
            Expression::Dynamic(_, dynamic) => Ok(self.dynamic(*dynamic)),
            Expression::Prefix(_, op, operand) => self.prefix(*op, operand),
            Expression::Postfix(_, operand, op) => self.postfix(operand, *op),
            Expression::Binary(_, op, lhs, rhs) => self.binary(*op, lhs, rhs),
            Expression::Ternary(_, test, yes, no) => {
                if self.value_of(test)?.is_truthy() {
                    self.evaluate(yes)
                } else {
                    self.evaluate(no)
                }
            }
            Expression::Array(_, elements) => {
                let mut operands = Vec::with_capacity(elements.len());
                for element in elements {
                    let operand = self.evaluate(element)?;
                    if operand.is_array() {
                        return Err(
                            error!(Runtime, element.location(); "array elements must be numbers"),
                        );
                    }
                    operands.push(operand);
                }
                Ok(Operand::Array(operands))
            }
            Expression::Single(_, index) => self.single(index),
            Expression::FixedRange(_, start, end, step) => self.fixed_range(start, end, step),
            Expression::RelativeRange(_, start, count, step) => {
                self.relative_range(start, count, step)
            }
        }
    }

    fn dynamic(&mut self, dynamic: Dynamic) -> Operand {
        match dynamic {
            Dynamic::Arguments => {
                let mut codes: Vec<Val> = self
                    .config
                    .args
                    .chars()
                    .map(|ch| Val::Integer(ch as i32))
                    .collect();
                codes.push(Val::Integer(0));
                Operand::from_vals(codes)
            }
            Dynamic::Counter => Operand::Mutable(Ref::Counter),
            Dynamic::Random => Operand::Value(Val::Float(self.random())),
            Dynamic::ScopeSize => {
                Operand::Value(Val::Integer(i32::try_from(self.memory.size()).unwrap_or(i32::MAX)))
            }
        }
    }

    fn prefix(&mut self, op: Prefix, operand: &Expression) -> Result<Operand> {
        let mutation: fn(Val) -> Val = match op {
            Prefix::Negate => return Ok(Operation::negate(self.value_of(operand)?).into()),
            Prefix::Not => return Ok(Operation::not(self.value_of(operand)?).into()),
            Prefix::Narrow => return Ok(Operation::narrow(self.value_of(operand)?).into()),
            Prefix::Invert => return Ok(Operation::invert(self.value_of(operand)?).into()),
            Prefix::Increment => Operation::increment,
            Prefix::Decrement => Operation::decrement,
        };
        let target = self.evaluate(operand)?;
        let reference = self.reference(&target)?;
        Ok(self.pre(&reference, mutation)?.into())
    }

    fn postfix(&mut self, operand: &Expression, op: Postfix) -> Result<Operand> {
        let mutation: fn(Val) -> Val = match op {
            Postfix::Increment => Operation::increment,
            Postfix::Decrement => Operation::decrement,
            Postfix::Narrow => Operation::narrow,
            Postfix::Toggle => Operation::not,
            Postfix::Invert => Operation::invert,
            Postfix::CastFloat => {
                return Ok(Val::Float(self.value_of(operand)?.to_float()).into());
            }
            Postfix::CastInt => {
                return Ok(Val::Integer(self.value_of(operand)?.to_int()).into());
            }
            Postfix::CastString => {
                let mut codes = self.value_of(operand)?.to_codes();
                codes.push(Val::Integer(0));
                return Ok(Operand::from_vals(codes));
            }
        };
        let target = self.evaluate(operand)?;
        let reference = self.reference(&target)?;
        Ok(self.post(&reference, mutation)?.into())
    }

    /// Mutates in place and answers the new value.
    pub(super) fn pre(&mut self, reference: &Ref, mutation: fn(Val) -> Val) -> Result<Val> {
        let val = mutation(self.read(reference)?);
        self.write(reference, val)?;
        self.read(reference)
    }

    /// Mutates in place and answers the value from before.
    pub(super) fn post(&mut self, reference: &Ref, mutation: fn(Val) -> Val) -> Result<Val> {
        let val = self.read(reference)?;
        self.write(reference, mutation(val))?;
        Ok(val)
    }

    fn binary(&mut self, op: Binary, lhs: &Expression, rhs: &Expression) -> Result<Operand> {
        if op.is_assignment() {
            let target = self.evaluate(lhs)?;
            let source = self.evaluate(rhs)?;
            self.update(&target, &source, operator(op))?;
            return Ok(target);
        }
        let l = self.value_of(lhs)?;
        match op {
            Binary::LogicOr if l.is_truthy() => return Ok(l.boolean(true).into()),
            Binary::LogicAnd if !l.is_truthy() => return Ok(l.boolean(false).into()),
            _ => {}
        }
        let r = self.value_of(rhs)?;
        Ok(operator(op)(l, r)?.into())
    }

    pub(super) fn single(&mut self, index: &Expression) -> Result<Operand> {
        let index = self.value_of(index)?;
        Ok(Operand::Mutable(Ref::Cell(self.memory.address(index)?)))
    }

    pub(super) fn fixed_range(
        &mut self,
        start: &Expression,
        end: &Expression,
        step: &Expression,
    ) -> Result<Operand> {
        let start = self.optional(start)?;
        let end = self.optional(end)?;
        let step = self.optional(step)?;
        Ok(Operand::from_cells(self.memory.fixed_range(start, end, step)?))
    }

    pub(super) fn relative_range(
        &mut self,
        start: &Expression,
        count: &Expression,
        step: &Expression,
    ) -> Result<Operand> {
        let start = self.optional(start)?;
        let count = self.value_of(count)?;
        let step = self.optional(step)?;
        Ok(Operand::from_cells(
            self.memory.relative_range(start, count, step)?,
        ))
    }

    fn optional(&mut self, expr: &Expression) -> Result<Option<Val>> {
        if expr.is_none() {
            return Ok(None);
        }
        Ok(Some(self.value_of(expr)?))
    }

    pub(super) fn read(&self, reference: &Ref) -> Result<Val> {
        match reference {
            Ref::Counter => Ok(Val::Integer(self.counter)),
            Ref::Cell(cell) => self.memory.get(cell),
        }
    }

    /// The counter only ever holds an integer.
    pub(super) fn write(&mut self, reference: &Ref, val: Val) -> Result<()> {
        match reference {
            Ref::Counter => {
                self.counter = val.to_int();
                Ok(())
            }
            Ref::Cell(cell) => self.memory.set(cell, val),
        }
    }

    pub(super) fn value(&self, operand: &Operand) -> Result<Val> {
        match operand {
            Operand::Value(val) => Ok(*val),
            Operand::Mutable(reference) => self.read(reference),
            Operand::Array(_) => Err(error!(Runtime; "expected a number, found an array")),
        }
    }

    /// Every element of an array, or the one scalar.
    pub(super) fn values(&self, operand: &Operand) -> Result<Vec<Val>> {
        match operand {
            Operand::Array(elements) => elements.iter().map(|e| self.value(e)).collect(),
            scalar => Ok(vec![self.value(scalar)?]),
        }
    }

    pub(super) fn reference(&self, operand: &Operand) -> Result<Ref> {
        match operand {
            Operand::Mutable(reference) => Ok(*reference),
            Operand::Value(_) => Err(error!(Runtime; "expected a reference, found a value")),
            Operand::Array(_) => Err(error!(Runtime; "expected a reference, found an array")),
        }
    }

    pub(super) fn references(&self, operand: &Operand) -> Result<Vec<Ref>> {
        match operand {
            Operand::Array(elements) => elements.iter().map(|e| self.reference(e)).collect(),
            scalar => Ok(vec![self.reference(scalar)?]),
        }
    }

    pub(super) fn store(&mut self, target: &Operand, source: &Operand) -> Result<()> {
        self.update(target, source, operator(Binary::Assign))
    }

    /// Applies `op` to each addressed cell. A scalar source is broadcast
    /// over an array target, an array source fills it position by
    /// position, and a single cell takes the first element of an array.
    pub(super) fn update(&mut self, target: &Operand, source: &Operand, op: BinaryFn) -> Result<()> {
        let references = self.references(target)?;
        let vals = match (target, source) {
            (Operand::Array(_), Operand::Array(_)) => self.values(source)?,
            (_, Operand::Array(elements)) => match elements.first() {
                Some(first) => vec![self.value(first)?],
                None => vec![],
            },
            (_, scalar) => vec![self.value(scalar)?; references.len()],
        };
        for (reference, val) in references.iter().zip(vals) {
            let updated = op(self.read(reference)?, val)?;
            self.write(reference, updated)?;
        }
        Ok(())
    }
}

fn operator(op: Binary) -> BinaryFn {
    use Binary::*;
    match op {
        Assign => |_, rhs| Ok(rhs),
        LogicOr => |l, r| Ok(l.boolean(l.is_truthy() || r.is_truthy())),
        LogicAnd => |l, r| Ok(l.boolean(l.is_truthy() && r.is_truthy())),
        LogicXor => Operation::logical_xor,
        BitOr | OrAssign => Operation::bit_or,
        BitXor | XorAssign => Operation::bit_xor,
        BitAnd | AndAssign => Operation::bit_and,
        Equal => Operation::equal,
        NotEqual => Operation::not_equal,
        Less => Operation::less,
        LessEqual => Operation::less_equal,
        Greater => Operation::greater,
        GreaterEqual => Operation::greater_equal,
        Shl | ShlAssign => Operation::shift_left,
        Shr | ShrAssign => Operation::shift_right,
        Ushr | UshrAssign => Operation::shift_right_unsigned,
        Add | AddAssign => Operation::sum,
        Sub | SubAssign => Operation::subtract,
        Mul | MulAssign => Operation::multiply,
        Div | DivAssign => Operation::divide,
        Mod | ModAssign => Operation::remainder,
    }
}
