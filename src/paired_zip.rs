//! Implementation of [`PairedZip`]

use core::{cmp::Ordering, fmt, iter::FusedIterator};

use crate::{
    Aligned,
    comparators::Comparator,
    internal::{Cursor, trace},
};

mod builder;
pub use builder::Builder;

/// Where the walk of a [`PairedZip`] currently is.
///
/// Derived purely from which of the two sorted inputs still have items.
/// [`WalkState::Done`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkState {
    /// Both sides have items; the next pair is decided by the comparator
    BothRemaining,
    /// Only the left side has items; every following pair is [`Aligned::Left`]
    OnlyLeftRemaining,
    /// Only the right side has items; every following pair is [`Aligned::Right`]
    OnlyRightRemaining,
    /// Both sides are exhausted
    Done,
}

/// Number of pairs of each kind a [`PairedZip`] has yielded so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlignStats {
    /// [`Aligned::Both`] pairs
    pub matched: usize,
    /// [`Aligned::Left`] pairs
    pub left_only: usize,
    /// [`Aligned::Right`] pairs
    pub right_only: usize,
}

impl AlignStats {
    /// Total number of yielded pairs
    #[inline]
    pub const fn total(&self) -> usize {
        self.matched + self.left_only + self.right_only
    }
}

/// Iterator over the aligned pairs of two sorted inputs.
///
/// Created by [`Builder::build`] or one of the convenience functions, such as
/// [`align_lazy`](crate::align_lazy). Both inputs are already sorted when this iterator
/// exists; every call to [`next`](Iterator::next) performs one step of the merge-walk
/// and yields exactly one pair.
///
/// The pair is decided by comparing the current heads `l` and `r` of the two sides:
/// * `l == r`: yields [`Aligned::Both`] and advances both sides
/// * `l < r` or the right side is exhausted: yields [`Aligned::Left`]
/// * `l > r` or the left side is exhausted: yields [`Aligned::Right`]
///
/// Runs of equal items are therefore paired positionally, in sorted order, and the
/// leftovers of the longer run are yielded one-sided.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "vec_storage")]
/// # {
/// use sorted_paired_zip::{Aligned, align_ord};
///
/// let mut zip = align_ord(["a", "a", "b"], ["a", "c"]);
/// assert_eq!(zip.next(), Some(Aligned::Both("a", "a")));
/// assert_eq!(zip.next(), Some(Aligned::Left("a")));
/// assert_eq!(zip.next(), Some(Aligned::Left("b")));
/// assert_eq!(zip.next(), Some(Aligned::Right("c")));
/// assert_eq!(zip.next(), None);
/// # }
/// ```
pub struct PairedZip<IT: Iterator, CMP> {
    left: Cursor<IT>,
    right: Cursor<IT>,
    cmp: CMP,
    stats: AlignStats,
}

impl<IT, CMP> fmt::Debug for PairedZip<IT, CMP>
where
    IT: Iterator + fmt::Debug,
    IT::Item: fmt::Debug,
    CMP: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairedZip")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("cmp", &self.cmp)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<IT, CMP> Clone for PairedZip<IT, CMP>
where
    IT: Iterator + Clone,
    IT::Item: Clone,
    CMP: Clone,
{
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            cmp: self.cmp.clone(),
            stats: self.stats,
        }
    }
}

impl<IT, CMP> PairedZip<IT, CMP>
where
    IT: Iterator,
    CMP: Comparator<IT::Item>,
{
    /// Both iterators must be sorted by `cmp`
    #[inline]
    pub(crate) fn new(left: IT, right: IT, cmp: CMP) -> Self {
        Self {
            left: Cursor::new(left),
            right: Cursor::new(right),
            cmp,
            stats: AlignStats::default(),
        }
    }

    /// Collects the remaining pairs into a [`Vec`](alloc::vec::Vec)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "vec_storage")]
    /// # {
    /// use sorted_paired_zip::{Aligned, align_ord};
    /// let v = align_ord([4, 7, 8], [7, 4]).into_vec();
    /// assert_eq!(v, vec![Aligned::Both(4, 4), Aligned::Both(7, 7), Aligned::Left(8)]);
    /// # }
    /// ```
    #[cfg(feature = "vec_storage")]
    pub fn into_vec(self) -> alloc::vec::Vec<Aligned<IT::Item>> {
        let mut res = alloc::vec::Vec::with_capacity(self.size_hint().0);
        res.extend(self);
        res
    }

    /// Returns a reference to the item the left side will yield next, without
    /// consuming it.
    #[inline]
    pub fn peek_left(&self) -> Option<&IT::Item> {
        self.left.peek()
    }

    /// Returns a reference to the item the right side will yield next, without
    /// consuming it.
    #[inline]
    pub fn peek_right(&self) -> Option<&IT::Item> {
        self.right.peek()
    }

    /// Current state of the walk
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "vec_storage")]
    /// # {
    /// use sorted_paired_zip::{WalkState, align_ord};
    ///
    /// let mut zip = align_ord([1, 2, 3], [1]);
    /// assert_eq!(zip.state(), WalkState::BothRemaining);
    /// zip.next();
    /// assert_eq!(zip.state(), WalkState::OnlyLeftRemaining);
    /// zip.by_ref().for_each(drop);
    /// assert_eq!(zip.state(), WalkState::Done);
    /// # }
    /// ```
    #[inline]
    pub fn state(&self) -> WalkState {
        match (self.left.is_exhausted(), self.right.is_exhausted()) {
            (false, false) => WalkState::BothRemaining,
            (false, true) => WalkState::OnlyLeftRemaining,
            (true, false) => WalkState::OnlyRightRemaining,
            (true, true) => WalkState::Done,
        }
    }

    /// Counts of pairs yielded so far
    #[inline]
    pub fn stats(&self) -> AlignStats {
        self.stats
    }
}

impl<IT, CMP> Iterator for PairedZip<IT, CMP>
where
    IT: Iterator,
    CMP: Comparator<IT::Item>,
{
    type Item = Aligned<IT::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => self.cmp.compare(l, r),
        };
        // panic in debug and wrapping in release is the expected behaviour
        #[allow(clippy::arithmetic_side_effects)]
        let pair = match order {
            Ordering::Equal => {
                self.stats.matched += 1;
                Aligned::Both(self.left.advance()?, self.right.advance()?)
            }
            Ordering::Less => {
                self.stats.left_only += 1;
                Aligned::Left(self.left.advance()?)
            }
            Ordering::Greater => {
                self.stats.right_only += 1;
                Aligned::Right(self.right.advance()?)
            }
        };
        if self.state() == WalkState::Done {
            trace!(
                matched = self.stats.matched,
                left_only = self.stats.left_only,
                right_only = self.stats.right_only,
                "paired zip exhausted"
            );
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every item is yielded exactly once, and a pair holds at most one item per side
        let (left_min, left_max) = self.left.size_hint();
        let (right_min, right_max) = self.right.size_hint();
        let max = match (left_max, right_max) {
            (Some(l), Some(r)) => l.checked_add(r),
            _ => None,
        };
        (left_min.max(right_min), max)
    }
}

// Once both cursors are exhausted they stay exhausted
impl<IT, CMP> FusedIterator for PairedZip<IT, CMP>
where
    IT: Iterator,
    CMP: Comparator<IT::Item>,
{
}
