//! Counter atomicity under concurrent mutation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use tally_core::Counter;

#[test]
fn increase_is_visible_immediately() {
    let c = Counter::new();
    let before = c.get_value();
    c.increase(5);
    assert_eq!(c.get_value(), before + 5);
}

#[test]
fn decrease_goes_below_zero() {
    let c = Counter::new();
    assert_eq!(c.decrease(1), -1);
    assert_eq!(c.get_value(), -1);
}

#[test]
fn mutations_return_post_update_value() {
    let c = Counter::with_value(10);
    assert_eq!(c.increase(3), 13);
    assert_eq!(c.decrease(20), -7);
}

#[test]
fn concurrent_increments_lose_no_updates() {
    let c = Arc::new(Counter::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let c = Arc::clone(&c);
        handles.push(thread::spawn(move || {
            for _ in 0..1_000 {
                c.increase(1);
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(c.get_value(), 8_000);
}

#[test]
fn interleaved_deltas_sum_exactly() {
    let c = Arc::new(Counter::new());
    let mut handles = Vec::new();
    // Four writers adding 1..=500 race four writers subtracting the same
    // amounts; the deltas cancel regardless of interleaving.
    for _ in 0..4 {
        let inc = Arc::clone(&c);
        handles.push(thread::spawn(move || {
            for amount in 1..=500 {
                inc.increase(amount);
            }
        }));
        let dec = Arc::clone(&c);
        handles.push(thread::spawn(move || {
            for amount in 1..=500 {
                dec.decrease(amount);
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(c.get_value(), 0);
}
