#![allow(clippy::type_complexity)]
use core::cmp::Ordering;

use alloc::vec::{self, Vec};

use crate::{
    Aligned, PairedZip,
    comparators::{ByFunc, ByKey, ByOrd},
    paired_zip::Builder,
};

/// [`PairedZip`] over `Vec`-backed sorted copies
pub type VecPairedZip<T, CMP> = PairedZip<vec::IntoIter<T>, CMP>;

/// Constructs a lazy [`PairedZip`] aligning `left` with `right` by `cmp`:
/// * Sorts both inputs (stable) into private [`Vec`]s
/// * Yields one [`Aligned`] pair per call to `next`, smallest first
/// * Items that compare equal are paired in order of the sorted inputs
///
/// `cmp` must be a consistent total preorder, the same for both inputs.
///
/// # Examples
///
/// ```
/// use sorted_paired_zip::{Aligned, align_lazy};
///
/// let mut zip = align_lazy(["b", "a"], ["c", "a"], |l, r| l.cmp(r));
/// assert_eq!(zip.next(), Some(Aligned::Both("a", "a")));
/// assert_eq!(zip.next(), Some(Aligned::Left("b")));
/// assert_eq!(zip.next(), Some(Aligned::Right("c")));
/// assert_eq!(zip.next(), None);
/// ```
pub fn align_lazy<T, L, R, F>(left: L, right: R, cmp: F) -> VecPairedZip<T, ByFunc<F>>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    F: Fn(&T, &T) -> Ordering,
{
    Builder::new(left, right).by_func(cmp).build()
}

/// Same as [`align_lazy`], but collects all pairs into a [`Vec`]
///
/// # Examples
///
/// ```
/// use sorted_paired_zip::{Aligned, align};
///
/// let pairs = align([4, 7, 8], [1, 2, 3, 4, 5, 6, 7, 8], |l, r| l.cmp(r));
/// assert_eq!(
///     pairs,
///     [
///         Aligned::Right(1),
///         Aligned::Right(2),
///         Aligned::Right(3),
///         Aligned::Both(4, 4),
///         Aligned::Right(5),
///         Aligned::Right(6),
///         Aligned::Both(7, 7),
///         Aligned::Both(8, 8),
///     ]
/// );
/// ```
pub fn align<T, L, R, F>(left: L, right: R, cmp: F) -> Vec<Aligned<T>>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    F: Fn(&T, &T) -> Ordering,
{
    align_lazy(left, right, cmp).into_vec()
}

/// Constructs a lazy [`PairedZip`] aligning items by their [`Ord`] implementation
pub fn align_ord<T, L, R>(left: L, right: R) -> VecPairedZip<T, ByOrd>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    T: Ord,
{
    Builder::new(left, right).build()
}

/// Constructs a lazy [`PairedZip`] aligning items by the key produced by `func`
///
/// Items with equal keys are paired even if they differ otherwise.
pub fn align_by_key<T, L, R, F, K>(left: L, right: R, func: F) -> VecPairedZip<T, ByKey<F>>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
    K: Ord,
{
    Builder::new(left, right).by_key(func).build()
}
