use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Numeric operators
///
/// Binary operators coerce the right operand to the kind of the left
/// operand. Comparisons answer 0 or 1 in the left operand's kind.

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Val {
        use Val::*;
        match val {
            Integer(n) => Integer(n.wrapping_neg()),
            Float(n) => Float(-n),
        }
    }

    pub fn not(val: Val) -> Val {
        val.boolean(!val.is_truthy())
    }

    pub fn narrow(val: Val) -> Val {
        val.boolean(val.is_truthy())
    }

    pub fn invert(val: Val) -> Val {
        use Val::*;
        match val {
            Integer(n) => Integer(!n),
            Float(n) => Float(!(n as i32) as f32),
        }
    }

    pub fn increment(val: Val) -> Val {
        use Val::*;
        match val {
            Integer(n) => Integer(n.wrapping_add(1)),
            Float(n) => Float(n + 1.0),
        }
    }

    pub fn decrement(val: Val) -> Val {
        use Val::*;
        match val {
            Integer(n) => Integer(n.wrapping_sub(1)),
            Float(n) => Float(n - 1.0),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        Ok(match lhs {
            Integer(l) => match rhs {
                Integer(r) => Integer(l.wrapping_add(r)),
                Float(r) => Integer(l.wrapping_add(r as i32)),
            },
            Float(l) => match rhs {
                Integer(r) => Float(l + r as f32),
                Float(r) => Float(l + r),
            },
        })
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        Ok(match lhs {
            Integer(l) => match rhs {
                Integer(r) => Integer(l.wrapping_sub(r)),
                Float(r) => Integer(l.wrapping_sub(r as i32)),
            },
            Float(l) => match rhs {
                Integer(r) => Float(l - r as f32),
                Float(r) => Float(l - r),
            },
        })
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        Ok(match lhs {
            Integer(l) => match rhs {
                Integer(r) => Integer(l.wrapping_mul(r)),
                Float(r) => Integer(l.wrapping_mul(r as i32)),
            },
            Float(l) => match rhs {
                Integer(r) => Float(l * r as f32),
                Float(r) => Float(l * r),
            },
        })
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Integer(l) => {
                let r = match rhs {
                    Integer(r) => r,
                    Float(r) => r as i32,
                };
                if r == 0 {
                    return Err(error!(Runtime; "division by zero"));
                }
                Ok(Integer(l.wrapping_div(r)))
            }
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l / r as f32)),
                Float(r) => Ok(Float(l / r)),
            },
        }
    }

    pub fn remainder(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Integer(l) => {
                let r = match rhs {
                    Integer(r) => r,
                    Float(r) => r as i32,
                };
                if r == 0 {
                    return Err(error!(Runtime; "division by zero"));
                }
                Ok(Integer(l.wrapping_rem(r)))
            }
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l % r as f32)),
                Float(r) => Ok(Float(l % r)),
            },
        }
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::bitwise(lhs, rhs, |l, r| l.wrapping_shl(r as u32))
    }

    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::bitwise(lhs, rhs, |l, r| l.wrapping_shr(r as u32))
    }

    pub fn shift_right_unsigned(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::bitwise(lhs, rhs, |l, r| (l as u32).wrapping_shr(r as u32) as i32)
    }

    pub fn bit_and(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::bitwise(lhs, rhs, |l, r| l & r)
    }

    pub fn bit_or(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::bitwise(lhs, rhs, |l, r| l | r)
    }

    pub fn bit_xor(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::bitwise(lhs, rhs, |l, r| l ^ r)
    }

    fn bitwise(lhs: Val, rhs: Val, op: fn(i32, i32) -> i32) -> Result<Val> {
        use Val::*;
        Ok(match lhs {
            Integer(l) => match rhs {
                Integer(r) => Integer(op(l, r)),
                Float(r) => Integer(op(l, r as i32)),
            },
            Float(l) => match rhs {
                Integer(r) => Float(op(l as i32, r) as f32),
                Float(r) => Float(op(l as i32, r as i32) as f32),
            },
        })
    }

    pub fn logical_xor(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(lhs.is_truthy() != rhs.is_truthy()))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(Operation::equal_bool(lhs, rhs)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(!Operation::equal_bool(lhs, rhs)))
    }

    fn equal_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => l == r,
                Float(r) => l == r as i32,
            },
            Float(l) => match rhs {
                Integer(r) => l == r as f32,
                Float(r) => l == r,
            },
        }
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(Operation::less_bool(lhs, rhs)))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(Operation::less_bool(lhs.coerce(rhs), lhs)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(Operation::less_equal_bool(lhs, rhs)))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.boolean(Operation::less_equal_bool(lhs.coerce(rhs), lhs)))
    }

    pub fn less_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => l < r,
                Float(r) => l < r as i32,
            },
            Float(l) => match rhs {
                Integer(r) => l < r as f32,
                Float(r) => l < r,
            },
        }
    }

    pub fn less_equal_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => l <= r,
                Float(r) => l <= r as i32,
            },
            Float(l) => match rhs {
                Integer(r) => l <= r as f32,
                Float(r) => l <= r,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Val::*;

    #[test]
    fn test_left_kind_wins() {
        assert_eq!(Operation::sum(Integer(3), Float(2.5)), Ok(Integer(5)));
        assert_eq!(Operation::sum(Float(3.5), Integer(2)), Ok(Float(5.5)));
        assert_eq!(Operation::multiply(Integer(2), Float(2.9)), Ok(Integer(4)));
        assert_eq!(Operation::less(Float(1.5), Integer(2)), Ok(Float(1.0)));
        assert_eq!(Operation::equal(Integer(3), Float(3.5)), Ok(Integer(1)));
    }

    #[test]
    fn test_integer_wraps() {
        assert_eq!(Operation::sum(Integer(i32::MAX), Integer(1)), Ok(Integer(i32::MIN)));
        assert_eq!(Operation::divide(Integer(i32::MIN), Integer(-1)), Ok(Integer(i32::MIN)));
    }

    #[test]
    fn test_division_by_zero() {
        let e = Operation::divide(Integer(1), Float(0.5)).unwrap_err();
        assert_eq!(e.text(), "division by zero");
        assert!(Operation::remainder(Integer(1), Integer(0)).is_err());
        assert_eq!(
            Operation::divide(Float(1.0), Integer(0)),
            Ok(Float(f32::INFINITY))
        );
    }

    #[test]
    fn test_float_bitwise_truncates() {
        assert_eq!(Operation::bit_or(Float(4.7), Integer(1)), Ok(Float(5.0)));
        assert_eq!(Operation::shift_left(Integer(1), Integer(33)), Ok(Integer(2)));
        assert_eq!(
            Operation::shift_right_unsigned(Integer(-1), Integer(28)),
            Ok(Integer(15))
        );
        assert_eq!(Operation::shift_right(Integer(-16), Integer(2)), Ok(Integer(-4)));
        assert_eq!(Operation::invert(Float(2.5)), Float(-3.0));
    }

    #[test]
    fn test_unary_keeps_kind() {
        assert_eq!(Operation::not(Float(0.0)), Float(1.0));
        assert_eq!(Operation::narrow(Integer(-9)), Integer(1));
        assert_eq!(Operation::negate(Integer(i32::MIN)), Integer(i32::MIN));
    }
}
