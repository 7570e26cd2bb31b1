use super::*;
use crate::mach::Val;

#[test]
fn test_label_resolution_is_cached() {
    let mut r = runtime(
        r#"
        _< 7.
        #< 0.
        _> 7.
        [1] = [1] + 1.
        _? [1] == 2.
        _< 7.
        #< [1].
        "#,
    );
    assert_eq!(run(&mut r), "2");
    assert_eq!(r.labels().scans(), 1);
    assert_eq!(r.labels().get(Val::Integer(7)), Some(2));
}

#[test]
fn test_computed_label_ids() {
    let mut r = runtime("[0] = 3. _< [0] * 2. #< 1. _> 6.0. #< 2.");
    assert_eq!(run(&mut r), "2");
}

#[test]
fn test_gosub_return_is_lifo() {
    let mut r = runtime(
        r#"
        _<< 1.
        #< 6.
        _< 99.
        _> 1.   #< 1.   _<< 2.  #< 5.  _>>.
        _> 2.   #< 2.   _<< 3.  #< 4.  _>>.
        _> 3.   #< 3.   _>>.
        _> 99.
        _>>.
        #< 7.
        "#,
    );
    assert_eq!(run(&mut r), "1234567");
    assert_eq!(r.call_depth(), 0);
}

#[test]
fn test_return_without_gosub() {
    let mut r = runtime("_>>. #< 1.");
    assert_eq!(run(&mut r), "1");
    assert_eq!(r.counter(), 2);
}

#[test]
fn test_goto_fallback() {
    let mut r = runtime("_< 5, 6. #< 1. _> 6. #< 2.");
    assert_eq!(run(&mut r), "2");
    assert_eq!(r.labels().scans(), 2);
}

#[test]
fn test_missing_label_is_a_no_op() {
    let mut r = runtime("_< 42. #< 1. _<< 43, 44. #< 2.");
    assert_eq!(run(&mut r), "12");
    assert_eq!(r.call_depth(), 0);
}

#[test]
fn test_jump_skips_one_statement() {
    let mut r = runtime("_? 1. #< 1. #< 2.");
    assert_eq!(run(&mut r), "2");
    let mut r = runtime("_? 0.0. #< 1. #< 2.");
    assert_eq!(run(&mut r), "12");
}

#[test]
fn test_counter_is_a_cell() {
    let mut r = runtime("#< c. c = c + 1. #< 1. #< c.");
    assert_eq!(run(&mut r), "03");
    let mut r = runtime("c += 1.5. #< 1. #< 2.");
    assert_eq!(run(&mut r), "2");
}

#[test]
fn test_label_redefinition() {
    let mut r = runtime("_> 1. [0]++. _? [0] > 2. _< 1. _> 1. #< [0].");
    assert_eq!(run(&mut r), "3");
}

#[test]
fn test_loop_is_bounded_by_cycles() {
    let mut r = runtime("_> 1. _< 1.");
    assert_eq!(run_cycles(&mut r, 100), "\n100 Execution cycles exceeded.\n");
}

#[test]
fn test_memory_scopes() {
    let mut r = runtime("[0] = 5. &+. #< [0]. &-. #< [0]. &-. &-. #< [0].");
    assert_eq!(run(&mut r), "055");
    assert_eq!(r.memory().depth(), 1);
}

#[test]
fn test_memory_transfer() {
    let mut r = runtime(
        r#"
        [0] = 7.
        &< [0].
        &+.
        &> [1].
        #< [1].
        &< {1, 2, 3}.
        &> [2:+2].
        #< [2:4].
        &!.
        &> [5].
        #< [5].
        "#,
    );
    assert_eq!(run(&mut r), "7{1, 2}0");
}

#[test]
fn test_text_input_queue() {
    let mut r = runtime("$> [0]. $> [1]. $!. $> [2]. #< [0:3].");
    assert_eq!(run(&mut r), "");
    r.enter("hi");
    assert_eq!(run(&mut r), "");
    r.enter("yo");
    assert_eq!(run(&mut r), "{104, 105, 121}");
}

#[test]
fn test_input_after_close() {
    let mut r = runtime("[0] = 9. #> [0]. $> [0]. #< [0].");
    r.close_input();
    assert_eq!(run(&mut r), "9");
}

#[test]
fn test_invalid_number_input() {
    let mut r = runtime("#> [0].");
    r.enter("twelve");
    assert_eq!(
        run(&mut r),
        "Runtime Error @ test (1, 1) :: invalid number `twelve`\n"
    );
}

#[test]
fn test_number_input_modes() {
    let mut r = runtime("#> [0]. #>> [1]. #< [0:2].");
    r.enter("2.75");
    r.enter("2.75");
    assert_eq!(run(&mut r), "{2.75, 2}");
}
