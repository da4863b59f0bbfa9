use core::{cmp::Ordering, marker::PhantomData};

#[cfg(feature = "vec_storage")]
use alloc::vec::Vec;

#[cfg(feature = "stackvec_storage")]
use stackvector::{Array, StackVec};

use super::PairedZip;
use crate::{
    comparators::{ByFunc, ByKey, ByOrd, Chain, Comparator, Reversed},
    error::{CapacityError, Side},
    internal::trace,
    storage::{SealedToken, SortBuffer},
};

/// Builder for [`PairedZip`]
///
/// Allows to configure how to compare the items of both inputs and where their sorted
/// copies are kept.
///
/// By default items are compared using [`Ord`] and the sorted copies live in a [`Vec`].
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "vec_storage")]
/// # {
/// use sorted_paired_zip::{Aligned, paired_zip::Builder};
///
/// let left = [("bob", 3), ("alice", 1)];
/// let right = [("carol", 1), ("dave", 2)];
///
/// let pairs = Builder::new(left, right)
///     .by_key(|&(_, id)| id)
///     .build()
///     .into_vec();
///
/// assert_eq!(
///     pairs,
///     [
///         Aligned::Both(("alice", 1), ("carol", 1)),
///         Aligned::Right(("dave", 2)),
///         Aligned::Left(("bob", 3)),
///     ]
/// );
/// # }
/// ```
#[derive(Debug)]
pub struct Builder<S, CMP, L, R> {
    left: L,
    right: R,
    comparator: CMP,
    _storage: PhantomData<S>,
}

impl<L, R> Builder<(), ByOrd, L, R>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
{
    /// Creates a new [`Builder`] aligning `left` with `right`.
    ///
    /// Inputs don't need to be sorted. Both are collected into a private
    /// `Vec` and sorted there; pass references (e.g. `&collection` or `.iter()`) to
    /// keep your collections.
    #[cfg(feature = "vec_storage")]
    #[inline]
    pub const fn new(left: L, right: R) -> Builder<Vec<L::Item>, ByOrd, L, R> {
        Builder::from_parts(left, right, ByOrd)
    }

    /// Creates a new [`Builder`] that keeps the sorted copies in stack-allocated buffers
    /// of capacity `N`, each.
    ///
    /// See [`new`](Builder::new) for the details. Sorting doesn't allocate either,
    /// it uses a stable insertion sort, so this is meant for small inputs.
    ///
    /// # Examples
    /// ```
    /// use sorted_paired_zip::{Aligned, paired_zip::Builder};
    ///
    /// let mut zip = Builder::new_stackvec::<4>([2, 1], [3, 1]).build();
    ///
    /// assert_eq!(zip.next(), Some(Aligned::Both(1, 1)));
    /// assert_eq!(zip.next(), Some(Aligned::Left(2)));
    /// assert_eq!(zip.next(), Some(Aligned::Right(3)));
    /// assert_eq!(zip.next(), None);
    /// ```
    #[cfg(feature = "stackvec_storage")]
    #[inline]
    #[allow(clippy::type_complexity)]
    pub const fn new_stackvec<const N: usize>(
        left: L, right: R,
    ) -> Builder<StackVec<[L::Item; N]>, ByOrd, L, R>
    where
        [L::Item; N]: Array<Item = L::Item>,
    {
        Builder::from_parts(left, right, ByOrd)
    }
}

impl<S, CMP, L, R> Builder<S, CMP, L, R>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
{
    #[inline]
    const fn from_parts(left: L, right: R, comparator: CMP) -> Self {
        Self {
            left,
            right,
            comparator,
            _storage: PhantomData,
        }
    }

    /// Compare items using comparator `cmp`
    #[inline]
    pub fn by<C: Comparator<L::Item>>(self, cmp: C) -> Builder<S, C, L, R> {
        Builder::from_parts(self.left, self.right, cmp)
    }

    /// Compare items using `func`
    #[inline]
    pub fn by_func<F>(self, func: F) -> Builder<S, ByFunc<F>, L, R>
    where
        F: Fn(&L::Item, &L::Item) -> Ordering,
    {
        self.by(ByFunc(func))
    }

    /// Compare items by comparing their keys produced by `func`
    #[inline]
    pub fn by_key<F, K>(self, func: F) -> Builder<S, ByKey<F>, L, R>
    where
        F: Fn(&L::Item) -> K,
        K: Ord,
    {
        self.by(ByKey(func))
    }

    /// Reverse the current comparator: both inputs are sorted and walked largest-first
    #[inline]
    pub fn reversed(self) -> Builder<S, Reversed<CMP>, L, R> {
        Builder::from_parts(self.left, self.right, Reversed(self.comparator))
    }

    /// If items are equal by the current comparator - compare them again using `next`.
    ///
    /// Items are only paired up when both comparators consider them equal.
    #[inline]
    pub fn then_by<C: Comparator<L::Item>>(self, next: C) -> Builder<S, Chain<CMP, C>, L, R> {
        Builder::from_parts(self.left, self.right, Chain::new(self.comparator, next))
    }
}

impl<S, CMP, L, R> Builder<S, CMP, L, R>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    S: SortBuffer<Item = L::Item>,
    CMP: Comparator<L::Item>,
{
    /// Collects and sorts both inputs, returning the [`PairedZip`] over them.
    ///
    /// Fails only if an input doesn't fit into a fixed-capacity buffer.
    ///
    /// Getting a compiler error
    /// ```custom
    /// the method `try_build` exists for struct `Builder<...>`,
    /// but its trait bounds were not satisfied
    /// ```
    /// means that the item type does not implement [`Ord`].
    /// Either implement it for your type or specify another way to compare items by using builder
    /// methods documented above.
    pub fn try_build(self) -> Result<PairedZip<S::IntoIter, CMP>, CapacityError> {
        let left: S = sorted_buffer(self.left, &self.comparator, Side::Left)?;
        let right: S = sorted_buffer(self.right, &self.comparator, Side::Right)?;
        trace!(
            left = SortBuffer::len(&left, SealedToken),
            right = SortBuffer::len(&right, SealedToken),
            "sorted inputs for paired zip"
        );
        Ok(PairedZip::new(
            left.into_iter(),
            right.into_iter(),
            self.comparator,
        ))
    }

    /// Same as [`try_build`](Builder::try_build), for storage that can't run out of
    /// capacity.
    ///
    /// # Panics
    ///
    /// If an input has more items than a fixed-capacity buffer (see
    /// [`new_stackvec`](Builder::new_stackvec)) can hold.
    pub fn build(self) -> PairedZip<S::IntoIter, CMP> {
        match self.try_build() {
            Ok(zip) => zip,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(feature = "vec_storage")]
impl<T> PairedZip<alloc::vec::IntoIter<T>, ByOrd> {
    /// Shorthand for [`Builder::new`]
    #[inline]
    pub fn builder<L, R>(left: L, right: R) -> Builder<Vec<T>, ByOrd, L, R>
    where
        L: IntoIterator<Item = T>,
        R: IntoIterator<Item = T>,
    {
        Builder::new(left, right)
    }
}

/// Collects `items` into a new buffer and stable-sorts it
fn sorted_buffer<S, I, C>(items: I, cmp: &C, side: Side) -> Result<S, CapacityError>
where
    S: SortBuffer,
    I: IntoIterator<Item = S::Item>,
    C: Comparator<S::Item>,
{
    let items = items.into_iter();
    let mut buffer = S::new(SealedToken);
    SortBuffer::reserve_for(&mut buffer, &items, SealedToken);
    for item in items {
        SortBuffer::try_push(&mut buffer, item, SealedToken)
            .map_err(|capacity| CapacityError { side, capacity })?;
    }
    SortBuffer::stable_sort_by(&mut buffer, |a, b| cmp.compare(a, b), SealedToken);
    Ok(buffer)
}
