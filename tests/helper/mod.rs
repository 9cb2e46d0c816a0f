use ::std::assert_eq;
use ::std::fmt;
use ::std::prelude::rust_2021::*;
use ::std::vec::Vec;

use ::steprange::{Producer, Step};

/// All practical test cases are assumed to use fewer than this many explicit elements.
const LIMIT: usize = 1000;

/// Number of extra `advance()` calls made after the first `End`, to check that it stays ended.
const AFTER_END: usize = 3;

/// Advances `producer` until it ends, comparing against `expected` and checking that every
/// reported `size_hint` is consistent with the number of elements actually remaining.
/// Then checks that the producer keeps reporting `End`.
#[allow(dead_code)] // compiled from multiple crates
#[track_caller]
pub(crate) fn check<P>(mut producer: P, expected: &[P::Item])
where
    P: Producer,
    P::Item: fmt::Debug + PartialEq,
{
    assert!(expected.len() < LIMIT);

    let mut actual = Vec::new();
    loop {
        assert_size_hint_valid(
            producer.size_hint(),
            expected.len().saturating_sub(actual.len()),
        );
        match producer.advance() {
            Step::Next(value) => actual.push(value),
            Step::End => break,
        }
        assert!(actual.len() <= LIMIT, "producer did not end");
    }
    assert_eq!(actual, expected);

    for _ in 0..AFTER_END {
        assert_size_hint_valid(producer.size_hint(), 0);
        assert!(producer.advance().is_end(), "produced an element after end");
    }
}

/// Returns the first `count` results of `producer`, including any `End`s.
#[allow(dead_code)] // compiled from multiple crates
pub(crate) fn steps<P: Producer>(mut producer: P, count: usize) -> Vec<Step<P::Item>> {
    (0..count).map(|_| producer.advance()).collect()
}

#[allow(dead_code)] // compiled from multiple crates
#[track_caller]
pub(crate) fn assert_size_hint_valid((lower, upper): (usize, Option<usize>), expected_len: usize) {
    assert!(
        lower <= expected_len,
        "lower bound {lower} exceeds expected length {expected_len}",
    );
    assert!(
        upper.map_or(true, |upper| upper >= expected_len),
        "upper bound {upper:?} is less than expected length {expected_len}",
    );
}
