#![allow(dead_code)]
use std::{cmp::Ordering, fmt::Debug};

use itertools::{EitherOrBoth, Itertools};
use sorted_paired_zip::Aligned;

/// `None` in the expected pairs of a [`Scenario`]
pub const ABSENT: Option<&str> = None;

pub struct Scenario {
    pub left: &'static [&'static str],
    pub right: &'static [&'static str],
    pub expected: &'static [(Option<&'static str>, Option<&'static str>)],
}

/// Compares pairs one by one, pointing at the first mismatch
pub fn assert_pairs_eq<T>(result: &[Aligned<T>], expected: &[(Option<T>, Option<T>)], name: &str)
where
    T: Clone + Debug + PartialEq,
{
    assert_eq!(
        result.len(),
        expected.len(),
        "lengths did not match on {name}: {result:?}"
    );
    for (idx, (pair, (l, r))) in result.iter().zip(expected).enumerate() {
        assert_eq!(
            pair.left(),
            l.as_ref(),
            "left side did not match on {name} at index {idx}"
        );
        assert_eq!(
            pair.right(),
            r.as_ref(),
            "right side did not match on {name} at index {idx}"
        );
    }
}

/// Reference alignment: stable sort both sides, then [`Itertools::merge_join_by`]
pub fn reference_alignment<T, F>(left: &[T], right: &[T], cmp: F) -> Vec<Aligned<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let sorted = |items: &[T]| {
        let mut items = items.to_vec();
        items.sort_by(&cmp);
        items
    };
    sorted(left)
        .into_iter()
        .merge_join_by(sorted(right), |l, r| cmp(l, r))
        .map(|pair| match pair {
            EitherOrBoth::Both(l, r) => Aligned::Both(l, r),
            EitherOrBoth::Left(l) => Aligned::Left(l),
            EitherOrBoth::Right(r) => Aligned::Right(r),
        })
        .collect()
}
