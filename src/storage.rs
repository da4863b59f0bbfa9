//! Sort buffers: where the sorted private copies of both inputs live while they are
//! being walked.
#[cfg(not(any(feature = "vec_storage", feature = "stackvec_storage")))]
compile_error!(
    "At least one storage feature must be enabled ('vec_storage' or 'stackvec_storage')"
);

use core::cmp::Ordering;

mod private {
    pub struct SealedToken;
}

pub(crate) use private::SealedToken;

/// Sealed sort buffer trait for this crate.
///
/// Why method sealing? Because these are internal building blocks of
/// [`Builder::try_build`](crate::paired_zip::Builder::try_build), and the contract
/// between them (collect, sort, then iterate in order) is only upheld by this crate.
///
/// This trait is public only to get around exposing restrictions in earlier rust versions.
///
/// The implementer must guarantee that:
/// * `try_push` adds a single element at the end of the collection, or returns
///   `Err(capacity)` leaving the collection untouched if it's full
/// * `stable_sort_by` is a stable sort
/// * `into_iter` yields the elements front to back
#[doc(hidden)]
pub trait SortBuffer: IntoIterator {
    fn new(_: SealedToken) -> Self;
    fn try_push(&mut self, value: Self::Item, _: SealedToken) -> Result<(), usize>;
    fn len(&self, _: SealedToken) -> usize;
    fn stable_sort_by<F>(&mut self, cmp: F, _: SealedToken)
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
    /// Rationale for this signature:
    /// We avoid calling `size_hint` for buffers that have a fixed capacity.
    fn reserve_for<I: Iterator>(&mut self, iter: &I, _: SealedToken);
}

/// Stable in-place sort that doesn't allocate.
///
/// Binary search finds the upper bound of the new element among the already sorted
/// prefix, so equal elements keep their relative order. `O(n log n)` comparisons,
/// `O(n^2)` moves.
#[cfg_attr(not(feature = "stackvec_storage"), allow(dead_code))]
pub(crate) fn insertion_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for idx in 1..items.len() {
        let (sorted, rest) = items.split_at(idx);
        let new = &rest[0];
        let pos = sorted.partition_point(|probe| cmp(probe, new) != Ordering::Greater);
        items[pos..=idx].rotate_right(1);
    }
}

#[cfg(feature = "vec_storage")]
mod vec;

#[cfg(feature = "stackvec_storage")]
mod stackvec;
