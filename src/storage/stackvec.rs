use core::cmp::Ordering;

use stackvector::{Array, StackVec};

use super::{SealedToken, SortBuffer, insertion_sort_by};

impl<T, A: Array<Item = T>> SortBuffer for StackVec<A> {
    #[inline(always)]
    fn new(_: SealedToken) -> Self {
        Self::new()
    }

    #[inline]
    fn try_push(&mut self, value: T, _: SealedToken) -> Result<(), usize> {
        if Self::len(self) == Self::capacity(self) {
            return Err(Self::capacity(self));
        }
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
        // slice::sort_by needs an allocator
        insertion_sort_by(self.as_mut_slice(), cmp);
    }
    #[inline(always)]
    fn reserve_for<I: Iterator>(&mut self, _iter: &I, _: SealedToken) {
        // StackVec is fixed capacity, so we don't need to reserve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let stack_vec: StackVec<[i32; 10]> = SortBuffer::new(SealedToken);
        assert_eq!(stack_vec.len(), 0);
        assert_eq!(stack_vec.capacity(), 10);
    }

    #[test]
    fn test_reserve_for() {
        let iter = 0..5;
        let mut stack_vec: StackVec<[i32; 10]> = SortBuffer::new(SealedToken);
        SortBuffer::reserve_for(&mut stack_vec, &iter, SealedToken);
        assert_eq!(stack_vec.len(), 0);
        assert_eq!(stack_vec.capacity(), 10);
    }

    #[test]
    fn test_try_push() {
        let mut stack_vec: StackVec<[i32; 4]> = SortBuffer::new(SealedToken);
        stack_vec.extend([1, 2, 3]);
        assert_eq!(SortBuffer::try_push(&mut stack_vec, 42, SealedToken), Ok(()));
        assert_eq!(stack_vec.as_slice(), &[1, 2, 3, 42]);
        assert_eq!(SortBuffer::try_push(&mut stack_vec, 43, SealedToken), Err(4));
        assert_eq!(SortBuffer::len(&stack_vec, SealedToken), 4);
    }

    #[test]
    fn test_stable_sort_by() {
        let mut stack_vec: StackVec<[(i32, char); 8]> = SortBuffer::new(SealedToken);
        stack_vec.extend([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        SortBuffer::stable_sort_by(&mut stack_vec, |a, b| a.0.cmp(&b.0), SealedToken);
        assert_eq!(stack_vec.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }
}
