use super::{Command, Operation, Runtime, Val};
use crate::error;
use crate::lang::Error;
use chrono::{Datelike, Local, Timelike};

type Result<T> = std::result::Result<T, Error>;

/// ## Builtin system commands

pub struct Function {}

impl Function {
    pub fn command(name: &str) -> Option<(usize, Command)> {
        let found: (usize, Command) = match name {
            "abs" => (1, Function::abs),
            "sign" => (1, Function::sign),
            "floor" => (1, Function::floor),
            "ceil" => (1, Function::ceil),
            "round" => (1, Function::round),
            "trunc" => (1, Function::trunc),
            "sqrt" => (1, |_, a| float(a, f32::sqrt)),
            "cbrt" => (1, |_, a| float(a, f32::cbrt)),
            "exp" => (1, |_, a| float(a, f32::exp)),
            "ln" => (1, |_, a| float(a, f32::ln)),
            "log" => (1, |_, a| float(a, f32::log10)),
            "log2" => (1, |_, a| float(a, f32::log2)),
            "sin" => (1, |_, a| float(a, f32::sin)),
            "cos" => (1, |_, a| float(a, f32::cos)),
            "tan" => (1, |_, a| float(a, f32::tan)),
            "asin" => (1, |_, a| float(a, f32::asin)),
            "acos" => (1, |_, a| float(a, f32::acos)),
            "atan" => (1, |_, a| float(a, f32::atan)),
            "sinh" => (1, |_, a| float(a, f32::sinh)),
            "cosh" => (1, |_, a| float(a, f32::cosh)),
            "tanh" => (1, |_, a| float(a, f32::tanh)),
            "pow" => (2, |_, a| float2(a, f32::powf)),
            "atan2" => (2, |_, a| float2(a, f32::atan2)),
            "hypot" => (2, |_, a| float2(a, f32::hypot)),
            "min" => (2, Function::min),
            "max" => (2, Function::max),
            "isalpha" => (1, |_, a| class(a, |c| c.is_ascii_alphabetic())),
            "isdigit" => (1, |_, a| class(a, |c| c.is_ascii_digit())),
            "isalnum" => (1, |_, a| class(a, |c| c.is_ascii_alphanumeric())),
            "isspace" => (1, |_, a| class(a, |c| c.is_ascii_whitespace() || c == '\x0b')),
            "isupper" => (1, |_, a| class(a, |c| c.is_ascii_uppercase())),
            "islower" => (1, |_, a| class(a, |c| c.is_ascii_lowercase())),
            "ispunct" => (1, |_, a| class(a, |c| c.is_ascii_punctuation())),
            "iscntrl" => (1, |_, a| class(a, |c| c.is_ascii_control())),
            "isxdigit" => (1, |_, a| class(a, |c| c.is_ascii_hexdigit())),
            "toupper" => (1, |_, a| map_char(a, |c| c.to_ascii_uppercase())),
            "tolower" => (1, |_, a| map_char(a, |c| c.to_ascii_lowercase())),
            "rand" => (0, Function::rand),
            "randint" => (2, Function::randint),
            "clock" => (0, Function::clock),
            "date" => (0, Function::date),
            "wait" => (1, Function::wait),
            _ => return None,
        };
        Some(found)
    }

    pub fn abs(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        use Val::*;
        Ok(vec![match one(args)? {
            Integer(n) => Integer(n.wrapping_abs()),
            Float(n) => Float(n.abs()),
        }])
    }

    pub fn sign(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        use Val::*;
        Ok(vec![match one(args)? {
            Integer(n) => Integer(n.signum()),
            Float(n) if n == 0.0 || n.is_nan() => Float(n),
            Float(n) => Float(n.signum()),
        }])
    }

    pub fn floor(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        integral(args, f32::floor)
    }

    pub fn ceil(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        integral(args, f32::ceil)
    }

    pub fn round(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        integral(args, f32::round)
    }

    pub fn trunc(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        integral(args, f32::trunc)
    }

    pub fn min(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        let (lhs, rhs) = two(args)?;
        let rhs = lhs.coerce(rhs);
        Ok(vec![if Operation::less_bool(rhs, lhs) { rhs } else { lhs }])
    }

    pub fn max(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        let (lhs, rhs) = two(args)?;
        let rhs = lhs.coerce(rhs);
        Ok(vec![if Operation::less_bool(lhs, rhs) { rhs } else { lhs }])
    }

    pub fn rand(runtime: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        arity(args, 0)?;
        Ok(vec![Val::Float(runtime.random())])
    }

    pub fn randint(runtime: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        let (lo, hi) = two(args)?;
        Ok(vec![Val::Integer(
            runtime.random_int(lo.to_int(), hi.to_int()),
        )])
    }

    pub fn clock(runtime: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        arity(args, 0)?;
        Ok(vec![Val::Float(runtime.elapsed().as_secs_f32())])
    }

    pub fn date(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        arity(args, 0)?;
        let now = Local::now();
        Ok(vec![
            Val::Integer(now.year()),
            Val::Integer(now.month() as i32),
            Val::Integer(now.day() as i32),
            Val::Integer(now.hour() as i32),
            Val::Integer(now.minute() as i32),
            Val::Integer(now.second() as i32),
        ])
    }

    pub fn wait(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
        let ms = one(args)?.to_int().max(0) as u64;
        std::thread::sleep(std::time::Duration::from_millis(ms));
        Ok(vec![])
    }
}

fn arity(args: &[Val], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(error!(Runtime; "expected {} arguments, found {}", expected, args.len()));
    }
    Ok(())
}

fn one(args: &[Val]) -> Result<Val> {
    match args {
        [val] => Ok(*val),
        _ => Err(error!(Runtime; "expected 1 argument, found {}", args.len())),
    }
}

fn two(args: &[Val]) -> Result<(Val, Val)> {
    match args {
        [lhs, rhs] => Ok((*lhs, *rhs)),
        _ => Err(error!(Runtime; "expected 2 arguments, found {}", args.len())),
    }
}

fn float(args: &[Val], f: fn(f32) -> f32) -> Result<Vec<Val>> {
    Ok(vec![Val::Float(f(one(args)?.to_float()))])
}

fn float2(args: &[Val], f: fn(f32, f32) -> f32) -> Result<Vec<Val>> {
    let (lhs, rhs) = two(args)?;
    Ok(vec![Val::Float(f(lhs.to_float(), rhs.to_float()))])
}

fn integral(args: &[Val], f: fn(f32) -> f32) -> Result<Vec<Val>> {
    Ok(vec![match one(args)? {
        Val::Integer(n) => Val::Integer(n),
        Val::Float(n) => Val::Float(f(n)),
    }])
}

fn to_char(val: Val) -> Option<char> {
    u32::try_from(val.to_int()).ok().and_then(char::from_u32)
}

fn class(args: &[Val], test: fn(char) -> bool) -> Result<Vec<Val>> {
    let found = to_char(one(args)?).map_or(false, test);
    Ok(vec![Val::Integer(found as i32)])
}

fn map_char(args: &[Val], f: fn(char) -> char) -> Result<Vec<Val>> {
    let val = one(args)?;
    Ok(vec![match to_char(val) {
        Some(ch) => Val::Integer(f(ch) as i32),
        None => Val::Integer(val.to_int()),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Val]) -> Vec<Val> {
        let mut r = Runtime::default();
        let (arity, command) = Function::command(name).unwrap();
        assert_eq!(arity, args.len());
        command(&mut r, args).unwrap()
    }

    #[test]
    fn test_integers_stay_integers() {
        assert_eq!(call("abs", &[Val::Integer(-4)]), vec![Val::Integer(4)]);
        assert_eq!(call("floor", &[Val::Integer(7)]), vec![Val::Integer(7)]);
        assert_eq!(call("floor", &[Val::Float(-1.5)]), vec![Val::Float(-2.0)]);
        assert_eq!(
            call("min", &[Val::Integer(3), Val::Float(2.5)]),
            vec![Val::Integer(2)]
        );
        assert_eq!(call("sqrt", &[Val::Integer(9)]), vec![Val::Float(3.0)]);
    }

    #[test]
    fn test_characters() {
        assert_eq!(call("isdigit", &[Val::Integer('7' as i32)]), vec![Val::Integer(1)]);
        assert_eq!(call("isalpha", &[Val::Integer(-1)]), vec![Val::Integer(0)]);
        assert_eq!(
            call("toupper", &[Val::Integer('q' as i32)]),
            vec![Val::Integer('Q' as i32)]
        );
    }

    #[test]
    fn test_randint_bounds() {
        for _ in 0..100 {
            let v = call("randint", &[Val::Integer(5), Val::Integer(3)])[0].to_int();
            assert!((3..=5).contains(&v));
        }
    }

    #[test]
    fn test_date_has_six_fields() {
        assert_eq!(call("date", &[]).len(), 6);
    }
}
