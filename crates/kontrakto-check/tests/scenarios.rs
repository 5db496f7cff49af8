//! End-to-end scenarios for the three contract kinds and the switch.

mod common;

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use common::{add, init_tracing, pad_to_even};
use kontrakto_check::{
    make_postcondition, make_postcondition_on_arguments, make_precondition, named, scoped,
    Checked, ContractKind,
};

#[test]
fn test_precondition_scenario() {
    init_tracing();
    let _on = scoped(true);
    let mut wrapped = make_precondition(
        |(a, b): &(i32, i32)| *a > 0 && *b > 0,
        "a and b must be positive",
    )
    .wrap(named("add", add));

    assert_eq!(wrapped.invoke((1, 2)), Ok(3));

    let err = wrapped.invoke((-11, 2)).unwrap_err();
    assert_eq!(err.kind(), ContractKind::EntryCheck);
    assert_eq!(err.message(), "a and b must be positive");
    insta::assert_snapshot!(err.to_string(), @"@pre: a and b must be positive");
}

#[test]
fn test_postcondition_scenario() {
    init_tracing();
    let _on = scoped(true);
    let mut wrapped = make_postcondition(|v: &i32| *v > 0, "sum must be positive").wrap(add);
    assert_eq!(wrapped.invoke((1, 2)), Ok(3));

    let mut minus_one =
        make_postcondition(|v: &i32| *v > 0, "sum must be positive").wrap(|_: &mut ()| -1);
    let err = minus_one.invoke(()).unwrap_err();
    assert_eq!(err.kind(), ContractKind::ExitResultCheck);
    insta::assert_snapshot!(err.to_string(), @"@post: sum must be positive");
}

#[test]
fn test_postcondition_on_arguments_scenario() {
    init_tracing();
    let _on = scoped(true);
    let mut wrapped = make_postcondition_on_arguments(
        |list: &Vec<i32>| list.len() % 2 == 0,
        "list len after call must be even",
    )
    .wrap(named("pad_to_even", pad_to_even));

    let mut four = vec![1, 2, 3, 4];
    assert_eq!(wrapped.call_with(&mut four), Ok(()));
    assert_eq!(four.len(), 4);

    let mut five = vec![1, 2, 3, 4, 5];
    assert_eq!(wrapped.call_with(&mut five), Ok(()));
    assert_eq!(five.len(), 6);

    let mut one = vec![1];
    let err = wrapped.call_with(&mut one).unwrap_err();
    assert_eq!(err.kind(), ContractKind::ExitArgumentsCheck);
    assert_eq!(one.len(), 1);
    insta::assert_snapshot!(err.to_string(), @"@post_arg: list len after call must be even");
}

#[test]
fn test_disabled_switch_scenario() {
    init_tracing();
    let _off = scoped(false);

    let mut pre = make_precondition(
        |(a, b): &(i32, i32)| *a > 0 && *b > 0,
        "a and b must be positive",
    )
    .wrap(add);
    assert_eq!(pre.invoke((-11, 2)), Ok(-9));

    let mut post = make_postcondition(|v: &i32| *v > 0, "sum must be positive").wrap(add);
    assert_eq!(post.invoke((-10, 2)), Ok(-8));

    let mut post_arg = make_postcondition_on_arguments(
        |list: &Vec<i32>| list.len() % 2 == 0,
        "list len after call must be even",
    )
    .wrap(pad_to_even);
    let mut one = vec![1];
    assert_eq!(post_arg.call_with(&mut one), Ok(()));
}

#[test]
fn test_enabling_later_does_not_arm_existing_wrappers() {
    let guard = scoped(false);
    let mut pre = make_precondition(|x: &i32| *x > 0, "x must be positive").wrap(|x: &mut i32| *x);
    let post = make_postcondition(|v: &i32| *v > 0, "v must be positive");
    drop(guard);

    let _on = scoped(true);
    let mut post = post.wrap(|x: &mut i32| *x);
    assert_eq!(pre.invoke(-1), Ok(-1));
    assert_eq!(post.invoke(-1), Ok(-1));

    // Built now, so checked.
    let mut fresh =
        make_precondition(|x: &i32| *x > 0, "x must be positive").wrap(|x: &mut i32| *x);
    assert!(fresh.invoke(-1).is_err());
}

#[test]
fn test_disabling_later_does_not_disarm_existing_wrappers() {
    let guard = scoped(true);
    let mut post_arg = make_postcondition_on_arguments(|v: &Vec<i32>| v.is_empty(), "must drain")
        .wrap(|v: &mut Vec<i32>| v.truncate(1));
    drop(guard);

    let _off = scoped(false);
    let mut list = vec![1, 2];
    let err = post_arg.call_with(&mut list).unwrap_err();
    assert_eq!(err.kind(), ContractKind::ExitArgumentsCheck);
    assert_eq!(list, vec![1]);
}

#[test]
fn test_predicate_panic_is_not_a_contract_error() {
    let _on = scoped(true);
    let calls = Cell::new(0);
    let mut wrapped = make_precondition(
        |_: &i32| -> bool { panic!("predicate fault") },
        "never reported",
    )
    .wrap(|x: &mut i32| {
        calls.set(calls.get() + 1);
        *x
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| wrapped.invoke(1)));
    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"predicate fault"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_target_panic_propagates_through_wrapper() {
    let _on = scoped(true);
    let mut wrapped = make_postcondition(|_: &i32| true, "unused")
        .wrap(|_: &mut i32| -> i32 { panic!("target fault") });

    let outcome = catch_unwind(AssertUnwindSafe(|| wrapped.invoke(1)));
    assert!(outcome.is_err());
}

#[test]
fn test_method_style_receiver_is_first_argument() {
    struct Account {
        balance: i64,
    }

    let _on = scoped(true);
    let mut withdraw = make_precondition(
        |(account, amount): &(&mut Account, i64)| *amount <= account.balance,
        "insufficient funds",
    )
    .wrap(make_postcondition_on_arguments(
        |(account, _): &(&mut Account, i64)| account.balance >= 0,
        "balance must stay non-negative",
    )
    .wrap(|(account, amount): &mut (&mut Account, i64)| {
        account.balance -= *amount;
        account.balance
    }));

    let mut account = Account { balance: 10 };
    assert_eq!(withdraw.invoke((&mut account, 4)), Ok(6));
    let err = withdraw.invoke((&mut account, 7)).unwrap_err();
    assert_eq!(err.message(), "insufficient funds");
    assert_eq!(account.balance, 6);
}
