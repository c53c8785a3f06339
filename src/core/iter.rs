//! Iterator atas elemen ring dalam urutan logis

use std::iter::FusedIterator;
use std::slice;

/// Iterator non-consuming: semua elemen `front`, lalu semua elemen `wrap`.
///
/// Dibuat oleh [`Ring::iter`](super::Ring::iter). Untuk mengulang iterasi,
/// buat iterator baru.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    wrap: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(front: &'a [T], wrap: &'a [T]) -> Self {
        Self {
            front: front.iter(),
            wrap: wrap.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.front.next().or_else(|| self.wrap.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.wrap.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.wrap.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_both_ends() {
        let front = [1, 2];
        let wrap = [3, 4];
        let mut it = Iter::new(&front, &wrap);

        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
