use super::*;
use crate::lang::Error;
use crate::mach::{Builtins, Command, Library, Val};

type Result<T> = std::result::Result<T, Error>;

#[test]
fn test_call_builtin() {
    let mut r = runtime(r#"[0:+5] = "sqrt". @< 0. @< 16. @> [10]. #< [10]."#);
    assert_eq!(run(&mut r), "4");
}

#[test]
fn test_unknown_command() {
    let mut r = runtime(r#"[0:+4] = "foo". @< 0. @>."#);
    assert_eq!(
        run(&mut r),
        "Runtime Error @ test (1, 23) :: unknown system command `foo`\n"
    );
}

#[test]
fn test_missing_arguments() {
    let mut r = runtime(r#"[0:+4] = "pow". @< 0. @< 2. @>."#);
    assert!(run(&mut r).contains("system command `pow` expects 2 arguments, found 1"));
}

#[test]
fn test_results_wait_in_queue() {
    let mut r = runtime(
        r#"
        [0:+5] = "date".
        @< 0.
        @>.
        @> [7].
        @> [8:+5].
        #< [7] > 2000.
        #< [9] >= 1 && [9] <= 31.
        "#,
    );
    assert_eq!(run(&mut r), "11");
}

#[test]
fn test_flush() {
    let mut r = runtime(r#"[0:+4] = "abs". @< 0. @< -3. @!. @> [5]. #< [5]."#);
    assert_eq!(run(&mut r), "0");
}

#[test]
fn test_array_arguments() {
    let mut r = runtime(r#"[0:+4] = "max". [4] = 3. [5] = 9. @< {0, [4], [5]}. @> [6]. #< [6]."#);
    assert_eq!(run(&mut r), "9");
}

struct Device;

fn swap(_: &mut Runtime, args: &[Val]) -> Result<Vec<Val>> {
    Ok(args.iter().rev().copied().collect())
}

impl Library for Device {
    fn command(&self, name: &str) -> Option<(usize, Command)> {
        match name {
            "swap" => Some((2, swap as Command)),
            _ => None,
        }
    }
}

#[test]
fn test_layered_library() {
    let mut r = Runtime::with_library(
        Config {
            scope_size: 16,
            ..Config::default()
        },
        (Device, Builtins),
    );
    r.load_str(
        "test",
        r#"[0:+5] = "swap". @< {0, 1, 2}. @> [0:2]. #< [0:2]. [0:+4] = "abs". @< {0, -5}. @> [0]. #< [0]."#,
    )
    .unwrap();
    assert_eq!(run(&mut r), "{2, 1}5");
}
