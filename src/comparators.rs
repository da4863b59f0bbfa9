//! Defines comparators for [`PairedZip`](crate::PairedZip)
//!
//! The same comparator is used to sort both inputs and to decide, during the walk,
//! whether the current heads of the two sides are matched (`Equal`) or which one is
//! emitted alone.
//!
//! Users of this crate may implement [`Comparator`] trait to create a custom comparator
//! or use [`ByOrd`] in [`Builder::by`](crate::paired_zip::Builder::by) to compare
//! items using [`Ord`] trait.
//!
//! Comparators can be chained by using [`Chain::new`].
//!
//! [`ByFunc`], [`ByKey`] and [`Reversed`] have no public constructors, they are constructed
//! by various [`Builder`](crate::paired_zip::Builder) methods.

use core::cmp::Ordering;

/// Trait used to compare elements of both inputs of a [`PairedZip`](crate::PairedZip)
///
/// Implementations should produce a consistent total preorder, see [`Ord`]
/// documentation for details. Elements comparing [`Ordering::Equal`] are allowed to
/// differ otherwise; they will be paired up.
///
/// Producing non-total or inconsistent ordering results in an unspecified (but
/// deterministic) alignment. It's never detected and never results in UB.
pub trait Comparator<T> {
    /// Compares two elements and returns an [`Ordering`]
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, C> Comparator<T> for &C
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        C::compare(self, a, b)
    }
}

/// Wrapper that reverses a comparator.
///
/// Both inputs get sorted largest-first and the walk pairs them in that order.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(pub(crate) C);

impl<C> Reversed<C> {
    #[inline]
    #[doc(hidden)]
    pub const fn new<T>(comparator: C) -> Self
    where
        C: Comparator<T>,
    {
        Self(comparator)
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Calls the second comparator if the first one returns [`Ordering::Equal`].
///
/// Elements only pair up if both comparators consider them equal.
#[derive(Debug, Clone, Copy)]
pub struct Chain<C1, C2> {
    first: C1,
    next: C2,
}

impl<C1, C2> Chain<C1, C2> {
    /// If the first comparator returns [`Ordering::Equal`] - compare
    /// elements using `next`.
    ///
    /// Similar to [`Ordering::then_with`]
    #[inline]
    pub const fn new(first: C1, next: C2) -> Self {
        Self { first, next }
    }
}

impl<T, C1, C2> Comparator<T> for Chain<C1, C2>
where
    C1: Comparator<T>,
    C2: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.next.compare(a, b),
            other => other,
        }
    }
}

/// Comparator that uses [`Ord`] to compare items, default for the
/// [`Builder`](crate::paired_zip::Builder).
///
/// # Example
/// Descending alignment:
///
/// ```
/// # #[cfg(feature = "vec_storage")]
/// # {
/// use sorted_paired_zip::{Aligned, PairedZip};
/// let res = PairedZip::builder([1, 3, 2], [3, 4])
///     .reversed()
///     .build()
///     .into_vec();
/// assert_eq!(
///     res,
///     [Aligned::Right(4), Aligned::Both(3, 3), Aligned::Left(2), Aligned::Left(1)]
/// );
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByOrd;

impl<T: Ord> Comparator<T> for ByOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Comparator that uses a function to compare items
///
/// Construct via [`Builder::by_func`](crate::paired_zip::Builder::by_func)
#[derive(Debug, Clone, Copy)]
pub struct ByFunc<F>(pub(crate) F);

impl<F> ByFunc<F> {
    #[inline]
    #[doc(hidden)]
    pub const fn new<T>(func: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self(func)
    }
}

impl<T, F> Comparator<T> for ByFunc<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// Comparator that uses a key to compare items
///
/// Construct via [`Builder::by_key`](crate::paired_zip::Builder::by_key)
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub(crate) F);

impl<F> ByKey<F> {
    #[inline]
    #[doc(hidden)]
    pub const fn new<T, K>(func: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self(func)
    }
}

impl<T, F, K> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a).cmp(&self.0(b))
    }
}
