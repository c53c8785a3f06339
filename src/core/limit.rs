//! Bounded view ke `n` elemen pertama dari sebuah [`Ring`]
//!
//! View meminjam ring sumber secara eksklusif (`&mut`), jadi tidak ada copy
//! dan tidak ada aliasing: selama view hidup, ring sumber tidak bisa
//! disentuh. Pop lewat view mengkonsumsi langsung dari ring sumber.

use std::iter::Take;

use super::error::RingError;
use super::iter::Iter;
use super::ring::Ring;

/// View read/pop ke prefix logis sebuah ring
pub struct Limit<'a, T> {
    ring: &'a mut Ring<T>,
    // sisa elemen yang boleh dilihat, selalu <= ring.len()
    remaining: usize,
}

impl<'a, T> Limit<'a, T> {
    pub(super) fn new(ring: &'a mut Ring<T>, n: usize) -> Self {
        let remaining = n.min(ring.len());
        Self { ring, remaining }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.remaining
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        self.peek_index(0)
    }

    #[inline]
    pub fn peek_index(&self, index: usize) -> Option<&T> {
        if index >= self.remaining {
            return None;
        }
        self.ring.peek_index(index)
    }

    pub fn iter(&self) -> Take<Iter<'_, T>> {
        self.ring.iter().take(self.remaining)
    }

    pub fn scan<P>(&self, mut predicate: P) -> Option<(usize, &T)>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().enumerate().find(|&(_, value)| predicate(value))
    }
}

impl<'a, T: Clone> Limit<'a, T> {
    /// Copy prefix view ke `out` tanpa mengkonsumsi
    pub fn copy_to(&self, out: &mut [T]) -> usize {
        let n = out.len().min(self.remaining);
        self.ring.copy_to(&mut out[..n])
    }
}

impl<'a, T: Default> Limit<'a, T> {
    pub fn pop_front(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.ring.pop_front()?;
        self.remaining -= 1;
        Some(value)
    }

    pub fn pop_index(&mut self, index: usize) -> Option<T> {
        if index >= self.remaining {
            return None;
        }
        let value = self.ring.pop_index(index)?;
        self.remaining -= 1;
        Some(value)
    }

    /// Buang sampai `n` elemen dari prefix; returns jumlah yang dibuang
    pub fn skip(&mut self, n: usize) -> usize {
        let skipped = self.ring.skip(n.min(self.remaining));
        self.remaining -= skipped;
        skipped
    }

    /// Stream-style read yang berhenti di batas view.
    ///
    /// Returns [`RingError::Eof`] jika view sudah habis.
    pub fn read_slice(&mut self, out: &mut [T]) -> Result<usize, RingError> {
        if self.remaining == 0 {
            return Err(RingError::Eof);
        }
        let n = out.len().min(self.remaining);
        let read = self.ring.read_slice(&mut out[..n])?;
        self.remaining -= read;
        Ok(read)
    }
}
