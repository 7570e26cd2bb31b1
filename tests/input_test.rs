mod common;
use common::*;

#[test]
fn test_number_input() {
    assert_eq!(run_with_input("#> [0]. #< [0] * 2.", &["1.25"]), "2.5");
    assert_eq!(run_with_input("#>> [0]. #< [0] / 2.", &["7"]), "3");
    assert_eq!(run_with_input("#>> [0]. #< [0].", &[" 7.9 "]), "7");
    assert_eq!(run_with_input("#> [0:2]. #< [0:2].", &["5"]), "{5, 5}");
}

#[test]
fn test_invalid_number() {
    assert_eq!(
        run_with_input("#>> [0].", &["x1"]),
        "Runtime Error @ test (1, 1) :: invalid number `x1`\n"
    );
}

#[test]
fn test_end_of_input_is_a_no_op() {
    assert_eq!(run_with_input("[0] = 9. #> [0]. $> [0]. #< [0].", &[]), "9");
}

#[test]
fn test_text_input() {
    assert_eq!(run_with_input("$> [0:3]. #< [0:4].", &["ab"]), "{97, 98, 0, 0}");
    assert_eq!(
        run_with_input("_> 1. $> [0]. _? [0] != 0. _< 2. $< [0]. _< 1. _> 2.", &["hey"]),
        "hey"
    );
}

#[test]
fn test_number_and_text_share_lines() {
    assert_eq!(run_with_input("#> [0]. $> [1]. #< [1].", &["3", "z"]), "122");
}

#[test]
fn test_waits_for_input() {
    let mut r = runtime("$< \"n? \". #> [0]. #< [0] + 1.");
    assert_eq!(exec(&mut r), "n? ");
    assert_eq!(exec(&mut r), "");
    r.enter("4");
    assert_eq!(exec(&mut r), "5");
}
