use alloc::vec::Vec;
use core::cmp::Ordering;

use super::{SealedToken, SortBuffer};

impl<T> SortBuffer for Vec<T> {
    #[inline(always)]
    fn new(_: SealedToken) -> Self {
        Self::new()
    }
    #[inline(always)]
    fn try_push(&mut self, value: T, _: SealedToken) -> Result<(), usize> {
        Self::push(self, value);
        Ok(())
    }
    #[inline(always)]
    fn len(&self, _: SealedToken) -> usize {
        Self::len(self)
    }
    #[inline]
    fn stable_sort_by<F>(&mut self, cmp: F, _: SealedToken)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(cmp);
    }
    #[inline(always)]
    fn reserve_for<I: Iterator>(&mut self, iter: &I, _: SealedToken) {
        Self::reserve(self, iter.size_hint().0);
    }
}
