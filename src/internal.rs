//! Internal implementation details of this library.
//!
//! Both sides of a [`PairedZip`](crate::PairedZip) are walked through a `Cursor`:
//! the sorted buffer's iterator with its front item eagerly peeked, so that the two
//! heads can be compared before deciding which side(s) to advance.
use core::{fmt, mem};

/// Holds within itself one peeked item from the iterator and the iterator itself.
/// It's like [`iter::Peekable`](core::iter::Peekable), except eager.
pub(crate) struct Cursor<IT: Iterator> {
    head: Option<IT::Item>,
    iter: IT,
}

impl<IT> Clone for Cursor<IT>
where
    IT: Iterator + Clone,
    IT::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            iter: self.iter.clone(),
        }
    }
}

impl<IT> fmt::Debug for Cursor<IT>
where
    IT: Iterator + fmt::Debug,
    IT::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("head", &self.head)
            .field("iter", &self.iter)
            .finish()
    }
}

impl<IT: Iterator> Cursor<IT> {
    #[inline]
    pub(crate) fn new(mut iter: IT) -> Self {
        Self {
            head: iter.next(),
            iter,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&IT::Item> {
        self.head.as_ref()
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the peeked item, replacing it with the next one from the iterator
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<IT::Item> {
        if self.head.is_none() {
            // don't poll the iterator past its end
            return None;
        }
        let next = self.iter.next();
        mem::replace(&mut self.head, next)
    }

    /// Size hint of the cursor, including the peeked item
    #[inline]
    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        if self.head.is_none() {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_add(1),
            hi.and_then(|hi| hi.checked_add(1)),
        )
    }
}

/// Forwards to [`tracing::trace!`] if the `tracing` feature is enabled,
/// otherwise expands to nothing.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace;
