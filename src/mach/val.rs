/// ## Numeric value
///
/// Every cell, literal, and intermediate result is one of these.
/// Mixed-kind operations always produce the kind of the left operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i32),
    Float(f32),
}

impl Default for Val {
    fn default() -> Self {
        Val::Integer(0)
    }
}

impl Val {
    pub fn is_integer(&self) -> bool {
        matches!(self, Val::Integer(_))
    }

    /// Zero is false in either kind. NaN is not zero.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Integer(n) => *n != 0,
            Val::Float(n) => *n != 0.0,
        }
    }

    /// Truncates toward zero. Out-of-range floats saturate and NaN becomes 0.
    pub fn to_int(&self) -> i32 {
        match self {
            Val::Integer(n) => *n,
            Val::Float(n) => *n as i32,
        }
    }

    pub fn to_float(&self) -> f32 {
        match self {
            Val::Integer(n) => *n as f32,
            Val::Float(n) => *n,
        }
    }

    /// Memory indices are wider than cells so wraparound cannot overflow.
    pub fn to_index(&self) -> i64 {
        match self {
            Val::Integer(n) => *n as i64,
            Val::Float(n) => *n as i64,
        }
    }

    /// 0 or 1 in this value's kind.
    pub fn boolean(&self, b: bool) -> Val {
        match self {
            Val::Integer(_) => Val::Integer(b as i32),
            Val::Float(_) => Val::Float(if b { 1.0 } else { 0.0 }),
        }
    }

    /// Converts `other` to this value's kind.
    pub fn coerce(&self, other: Val) -> Val {
        match self {
            Val::Integer(_) => Val::Integer(other.to_int()),
            Val::Float(_) => Val::Float(other.to_float()),
        }
    }

    /// Character codes of the decimal formatting.
    pub fn to_codes(&self) -> Vec<Val> {
        self.to_string()
            .chars()
            .map(|ch| Val::Integer(ch as i32))
            .collect()
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Val::Integer(0).is_truthy());
        assert!(!Val::Float(-0.0).is_truthy());
        assert!(Val::Float(f32::NAN).is_truthy());
        assert!(Val::Integer(-3).is_truthy());
    }

    #[test]
    fn test_to_int_saturates() {
        assert_eq!(Val::Float(2.9).to_int(), 2);
        assert_eq!(Val::Float(-2.9).to_int(), -2);
        assert_eq!(Val::Float(f32::NAN).to_int(), 0);
        assert_eq!(Val::Float(f32::INFINITY).to_int(), i32::MAX);
        assert_eq!(Val::Float(-1e20).to_int(), i32::MIN);
    }

    #[test]
    fn test_boolean_keeps_kind() {
        assert_eq!(Val::Float(7.0).boolean(true), Val::Float(1.0));
        assert_eq!(Val::Integer(7).boolean(false), Val::Integer(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Integer(-5).to_string(), "-5");
        assert_eq!(Val::Float(5.5).to_string(), "5.5");
        assert_eq!(Val::Float(3.0).to_string(), "3");
    }
}
