//! The unit of output of a [`PairedZip`](crate::PairedZip)

/// A pair of aligned elements, at least one of which is present.
///
/// `Left` and `Right` mean that the element had no counterpart (by the
/// comparator) on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aligned<T> {
    /// Elements from both inputs that compared equal
    Both(T, T),
    /// Element from the left input with no match on the right
    Left(T),
    /// Element from the right input with no match on the left
    Right(T),
}

impl<T> Aligned<T> {
    /// Builds a pair from two optional sides. Returns `None` if both are absent.
    ///
    /// ```
    /// use sorted_paired_zip::Aligned;
    ///
    /// assert_eq!(Aligned::from_options(Some(1), None), Some(Aligned::Left(1)));
    /// assert_eq!(Aligned::<i32>::from_options(None, None), None);
    /// ```
    #[inline]
    pub fn from_options(left: Option<T>, right: Option<T>) -> Option<Self> {
        match (left, right) {
            (Some(l), Some(r)) => Some(Aligned::Both(l, r)),
            (Some(l), None) => Some(Aligned::Left(l)),
            (None, Some(r)) => Some(Aligned::Right(r)),
            (None, None) => None,
        }
    }

    /// Splits the pair into its two optional sides
    #[inline]
    pub fn into_options(self) -> (Option<T>, Option<T>) {
        match self {
            Aligned::Both(l, r) => (Some(l), Some(r)),
            Aligned::Left(l) => (Some(l), None),
            Aligned::Right(r) => (None, Some(r)),
        }
    }

    /// Left element, if present
    #[inline]
    pub fn left(&self) -> Option<&T> {
        match self {
            Aligned::Both(l, _) | Aligned::Left(l) => Some(l),
            Aligned::Right(_) => None,
        }
    }

    /// Right element, if present
    #[inline]
    pub fn right(&self) -> Option<&T> {
        match self {
            Aligned::Both(_, r) | Aligned::Right(r) => Some(r),
            Aligned::Left(_) => None,
        }
    }

    /// Consumes the pair, returning the left element if present
    #[inline]
    pub fn into_left(self) -> Option<T> {
        self.into_options().0
    }

    /// Consumes the pair, returning the right element if present
    #[inline]
    pub fn into_right(self) -> Option<T> {
        self.into_options().1
    }

    /// The element the pair is positioned by: the left one if present,
    /// otherwise the right one.
    ///
    /// Keys of consecutive pairs of a [`PairedZip`](crate::PairedZip) are
    /// non-decreasing under its comparator.
    #[inline]
    pub fn key(&self) -> &T {
        match self {
            Aligned::Both(l, _) | Aligned::Left(l) => l,
            Aligned::Right(r) => r,
        }
    }

    /// Returns `true` if the left side is present
    #[inline]
    pub fn has_left(&self) -> bool {
        !matches!(self, Aligned::Right(_))
    }

    /// Returns `true` if the right side is present
    #[inline]
    pub fn has_right(&self) -> bool {
        !matches!(self, Aligned::Left(_))
    }

    /// `true` for matched pairs
    #[inline]
    pub fn is_both(&self) -> bool {
        matches!(self, Aligned::Both(..))
    }

    /// Converts `&Aligned<T>` to `Aligned<&T>`
    #[inline]
    pub fn as_ref(&self) -> Aligned<&T> {
        match self {
            Aligned::Both(l, r) => Aligned::Both(l, r),
            Aligned::Left(l) => Aligned::Left(l),
            Aligned::Right(r) => Aligned::Right(r),
        }
    }

    /// Applies `func` to every present element, keeping the shape of the pair
    #[inline]
    pub fn map<U>(self, mut func: impl FnMut(T) -> U) -> Aligned<U> {
        match self {
            Aligned::Both(l, r) => Aligned::Both(func(l), func(r)),
            Aligned::Left(l) => Aligned::Left(func(l)),
            Aligned::Right(r) => Aligned::Right(func(r)),
        }
    }
}

impl<T> From<Aligned<T>> for (Option<T>, Option<T>) {
    #[inline]
    fn from(value: Aligned<T>) -> Self {
        value.into_options()
    }
}
