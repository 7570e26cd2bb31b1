mod common;
use common::*;
use minim::mach::Config;

#[test]
fn test_left_operand_kind_wins() {
    assert_eq!(run("#< 3 + 2.5. $< ' '. #< 3.5 + 2."), "5 5.5");
    assert_eq!(run("#< (2.0 < 3) / 2. $< ' '. #< (2 < 3) / 2."), "0.5 0");
}

#[test]
fn test_division() {
    assert_eq!(run("#< 7 / 2. $< ' '. #< 7.0 / 2. $< ' '. #< -7 % 3."), "3 3.5 -1");
    assert_eq!(run("#< 1.0 / 0."), "inf");
    assert_eq!(
        run("[0] = 1 / 0."),
        "Runtime Error @ test (1, 9) :: division by zero\n"
    );
}

#[test]
fn test_integers_wrap() {
    assert_eq!(run("#< 2147483647 + 1."), "-2147483648");
    assert_eq!(run("#< 3000000000."), "3000000000");
}

#[test]
fn test_shifts() {
    assert_eq!(
        run("#< -16 >> 2. $< ' '. #< -16 >>> 28. $< ' '. #< 1 << 33."),
        "-4 15 2"
    );
}

#[test]
fn test_only_logical_operators_short_circuit() {
    assert_eq!(
        run("[0] = 0 && [1]++. [2] = 1 || [3]++. #< {[0], [1], [2], [3]}."),
        "{0, 0, 1, 0}"
    );
    assert_eq!(run("[0] = 0 & [1]++. [2] = 1 | [3]++. #< [1] + [3]."), "2");
}

#[test]
fn test_ternary() {
    assert_eq!(run("#< 0 ? 1 : 2. #< 1 ? 3 : 4. #< F ? 5 : T ? 6 : 7."), "246");
}

#[test]
fn test_prefix_is_pure_and_postfix_mutates() {
    assert_eq!(run("[0] = 5. #< !![0]. $< ' '. #< [0]!!. $< ' '. #< [0]."), "1 5 1");
    assert_eq!(run("[1] = 0. #< ~[1]. $< ' '. #< [1]~. $< ' '. #< [1]."), "-1 0 -1");
    assert_eq!(run("[2] = 3. #< ++[2]. $< ' '. #< [2]--. $< ' '. #< [2]."), "4 4 3");
    assert_eq!(run("[3] = 2. #< [3]!. $< ' '. #< [3]."), "2 0");
}

#[test]
fn test_mutation_needs_a_reference() {
    assert_eq!(
        run("#< ++3."),
        "Runtime Error @ test (1, 4) :: expected a reference, found a value\n"
    );
}

#[test]
fn test_casts() {
    assert_eq!(run("#< 7.9:i. $< ' '. #< 2:f / 4. $< ' '. $< 42:s."), "7 0.5 42");
    assert_eq!(run("#< (-2.5):s."), "{45, 50, 46, 53, 0}");
}

#[test]
fn test_constants() {
    assert_eq!(run("#< T + F. $< ' '. #< I. $< ' '. #< N."), "1 inf NaN");
    assert_eq!(run("#< P > 3.14 && P < 3.15."), "1");
}

#[test]
fn test_assignment_chains() {
    assert_eq!(run("[0] = [1] = 5. #< [0] + [1]."), "10");
    assert_eq!(run("[0] = 10. [0] -= 3. [0] *= 2. [0] >>= 1. #< [0]."), "7");
}

#[test]
fn test_compound_assignment_over_a_range() {
    assert_eq!(
        run("[0:3] = 1. [0:3] += {10, 20, 30}. [3:+2] |= 4. #< [0:5]."),
        "{11, 21, 31, 4, 4}"
    );
}

#[test]
fn test_dynamic_literals() {
    assert_eq!(run("#< m."), "32");
    assert_eq!(run("#< r < 1. #< r >= 0."), "11");
    let mut r = runtime_with(
        Config {
            args: "xy".to_string(),
            ..Config::default()
        },
        "$< a. #< a.",
    );
    assert_eq!(exec(&mut r), "xy{120, 121, 0}");
}

#[test]
fn test_array_elements_must_be_numbers() {
    assert_eq!(
        run("#< {1, [0:2]}."),
        "Runtime Error @ test (1, 8) :: array elements must be numbers\n"
    );
}
