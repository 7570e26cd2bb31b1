mod common;
use common::*;

#[test]
fn test_math() {
    assert_eq!(run(r#"[0:+5] = "sqrt". @< 0. @< 16. @> [10]. #< [10]."#), "4");
    assert_eq!(run(r#"[0:+4] = "pow". @< {0, 2, 10}. @> [10]. #< [10]."#), "1024");
    assert_eq!(run(r#"[0:+4] = "min". @< {0, 3, 2.5}. @> [10]. #< [10]."#), "2");
    assert_eq!(run(r#"[20:+4] = "abs". @< 20. @< -3. @> [0]. #< [0]."#), "3");
}

#[test]
fn test_characters() {
    assert_eq!(run(r#"[0:+8] = "toupper". @< 0. @< 'q'. @> [10]. $< [10]."#), "Q");
    assert_eq!(run(r#"[0:+8] = "isdigit". @< {0, '7'}. @> [10]. #< [10]."#), "1");
}

#[test]
fn test_random_and_time() {
    assert_eq!(
        run(r#"[0:+8] = "randint". @< {0, 1, 6}. @> [10]. #< [10] >= 1 && [10] <= 6."#),
        "1"
    );
    assert_eq!(run(r#"[0:+6] = "clock". @< 0. @> [10]. #< [10] >= 0."#), "1");
}

#[test]
fn test_wrong_argument_count() {
    assert_eq!(
        run(r#"[0:+4] = "abs". @< 0. @>."#),
        "Runtime Error @ test (1, 23) :: system command `abs` expects 1 arguments, found 0\n"
    );
}
