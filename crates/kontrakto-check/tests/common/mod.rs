//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::Once;

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness so it only shows for
/// failing tests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn add((a, b): &mut (i32, i32)) -> i32 {
    *a + *b
}

/// Appends one element when the list is odd-length and longer than three.
pub fn pad_to_even(list: &mut Vec<i32>) {
    if list.len() > 3 && list.len() % 2 == 1 {
        list.push(0);
    }
}
