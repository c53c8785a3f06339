//! Fixed-Capacity Ring Buffer dengan dua view di atas satu backing store
//!
//! Layout fisik (capacity = 8, contoh setelah wraparound):
//!
//! ```text
//!   offset:  0   1   2   3   4   5   6   7
//!          [ w0  w1  .   .   .   f0  f1  f2 ]
//!            '-wrap-'            '--front--'
//! ```
//!
//! - `front` berisi elemen paling awal dan selalu berakhir di ujung storage
//!   begitu `wrap` tidak kosong.
//! - `wrap` selalu mulai di offset 0 dan hanya tumbuh setelah `front`
//!   penuh secara fisik.
//! - Urutan logis = `front` lalu `wrap`. Tidak ada aritmetika modulo.
//!
//! Saat `front` habis secara fisik (start == capacity), `wrap` naik menjadi
//! `front` baru dan `wrap` dikosongkan (view swap, O(1)).
//!
//! Tidak ada sinkronisasi internal. Akses concurrent harus dikunci dari luar.

use std::fmt;
use std::mem;
use std::ops::Range;

use tracing::{debug, trace, warn};

use super::error::RingError;
use super::iter::Iter;
use super::limit::Limit;

/// Region (offset, panjang) di dalam backing store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

impl Span {
    const EMPTY: Span = Span { start: 0, len: 0 };

    #[inline(always)]
    fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline(always)]
    fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Fixed-capacity FIFO ring buffer.
///
/// Satu backing store dengan panjang `capacity`, dialokasikan sekali saat
/// [`Ring::new`] dan hanya diganti oleh [`Ring::resize`]. Slot yang sudah
/// dikonsumsi di-reset ke `T::default()` sehingga tidak ada referensi yang
/// tertahan di storage yang tidak terpakai.
#[derive(Clone)]
pub struct Ring<T> {
    elements: Box<[T]>,
    front: Span,
    // `wrap.start` selalu 0
    wrap: Span,
}

impl<T> Ring<T> {
    /// Jumlah elemen dalam ring
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.front.len + self.wrap.len
    }

    /// Cek apakah ring kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cek apakah ring penuh
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() == self.elements.len()
    }

    /// Kapasitas ring. Konstan kecuali lewat `resize`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Sisa slot kosong
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Slice occupied `(front, wrap)` dalam urutan logis.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        (
            &self.elements[self.front.range()],
            &self.elements[self.wrap.range()],
        )
    }

    /// Push satu elemen ke akhir ring.
    ///
    /// Returns `false` jika ring penuh; ring tidak berubah.
    #[inline(always)]
    pub fn push_back(&mut self, value: T) -> bool {
        let end = self.front.end();
        if end < self.elements.len() {
            self.elements[end] = value;
            self.front.len += 1;
        } else if self.len() < self.elements.len() {
            // front mentok di ujung storage, lanjut di sisi kiri
            self.elements[self.wrap.len] = value;
            self.wrap.len += 1;
        } else {
            return false;
        }
        true
    }

    /// Elemen pertama tanpa mengkonsumsi
    #[inline(always)]
    pub fn peek_front(&self) -> Option<&T> {
        if self.front.len == 0 {
            return None;
        }
        Some(&self.elements[self.front.start])
    }

    /// Elemen pada index logis `index` tanpa mengkonsumsi.
    /// Index 0 adalah elemen pertama.
    #[inline]
    pub fn peek_index(&self, index: usize) -> Option<&T> {
        match index.checked_sub(self.front.len) {
            None => Some(&self.elements[self.front.start + index]),
            Some(idx) if idx < self.wrap.len => Some(&self.elements[idx]),
            Some(_) => None,
        }
    }

    /// Iterator atas semua elemen dalam urutan logis
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, wrap) = self.as_slices();
        Iter::new(front, wrap)
    }

    /// Linear scan dalam urutan logis.
    ///
    /// Returns index logis dan elemen pertama yang memenuhi `predicate`.
    pub fn scan<P>(&self, mut predicate: P) -> Option<(usize, &T)>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().enumerate().find(|&(_, value)| predicate(value))
    }

    /// Susun ulang storage sehingga semua elemen menjadi satu region
    /// contiguous mulai offset 0. `wrap` menjadi kosong dan free space
    /// yang ditawarkan `fill` menjadi maksimal.
    pub fn compact(&mut self) {
        if self.front.start == 0 {
            // start 0 berarti wrap pasti kosong
            return;
        }

        // rotate_left(start): front pindah ke [0, front.len), wrap tepat di
        // belakangnya karena front berakhir di ujung storage saat wrap terisi.
        let len = self.len();
        self.elements.rotate_left(self.front.start);
        trace!(len, shifted = self.front.start, "ring compacted");

        self.front = Span { start: 0, len };
        self.wrap = Span::EMPTY;
    }

    /// View yang dibatasi ke `n` elemen logis pertama, tanpa copy.
    ///
    /// Jika ring berisi `<= n` elemen, view mencakup seluruh ring.
    /// Selama view hidup, ring sumber terkunci oleh borrow.
    pub fn limit(&mut self, n: usize) -> Limit<'_, T> {
        Limit::new(self, n)
    }

    /// Geser awal `front` sebanyak `n`. Slot yang dilewati harus sudah
    /// dikosongkan oleh pemanggil.
    #[inline(always)]
    fn advance_front(&mut self, n: usize) {
        self.front.start += n;
        self.front.len -= n;
        if self.front.start == self.elements.len() {
            // front habis secara fisik: wrap naik menjadi front baru
            self.front = mem::replace(&mut self.wrap, Span::EMPTY);
        }
    }

    /// Konsumsi sampai `n` elemen dari depan, per chunk contiguous.
    /// `sink` menerima slot yang akan dilepas dan wajib mengosongkannya.
    fn consume_front<F>(&mut self, mut n: usize, mut sink: F) -> usize
    where
        F: FnMut(&mut [T]),
    {
        let mut consumed = 0;
        while n > 0 && self.front.len > 0 {
            let chunk = n.min(self.front.len);
            let start = self.front.start;
            sink(&mut self.elements[start..start + chunk]);
            self.advance_front(chunk);
            consumed += chunk;
            n -= chunk;
        }
        consumed
    }
}

impl<T: Default> Ring<T> {
    /// Membuat ring buffer baru dengan kapasitas tetap.
    ///
    /// Alokasi hanya terjadi sekali di sini; semua slot berisi
    /// `T::default()`. Kapasitas 0 valid (setiap push gagal).
    pub fn new(capacity: usize) -> Self {
        let mut elements = Vec::with_capacity(capacity);
        elements.resize_with(capacity, T::default);

        Self {
            elements: elements.into_boxed_slice(),
            front: Span::EMPTY,
            wrap: Span::EMPTY,
        }
    }

    /// Pop elemen pertama. Returns `None` jika ring kosong.
    #[inline(always)]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.front.len == 0 {
            return None;
        }

        let value = mem::take(&mut self.elements[self.front.start]);
        self.advance_front(1);
        Some(value)
    }

    /// Pop elemen pada index logis `index`.
    ///
    /// Elemen di sekitarnya digeser supaya ujung `front` dan awal `wrap`
    /// tetap bersebelahan: geser kiri di dalam `wrap`, geser kanan di dalam
    /// `front`. Biaya O(jarak geser). `pop_index(0)` sama dengan `pop_front`.
    pub fn pop_index(&mut self, index: usize) -> Option<T> {
        if index == 0 {
            return self.pop_front();
        }
        if index >= self.len() {
            return None;
        }

        if let Some(idx) = index.checked_sub(self.front.len) {
            let value = mem::take(&mut self.elements[idx]);
            // slot kosong ikut bergeser ke akhir wrap
            self.elements[idx..self.wrap.len].rotate_left(1);
            self.wrap.len -= 1;
            return Some(value);
        }

        // index >= 1, jadi front masih berisi minimal satu elemen setelah geser
        let at = self.front.start + index;
        let value = mem::take(&mut self.elements[at]);
        self.elements[self.front.start..=at].rotate_right(1);
        self.advance_front(1);
        Some(value)
    }

    /// Buang `n` elemen pertama dan return jumlah yang benar-benar dibuang
    /// (maksimal `len()`). Slot yang dibuang di-reset ke default.
    pub fn skip(&mut self, n: usize) -> usize {
        let len = self.len();
        if n >= len {
            self.reset();
            return len;
        }
        self.consume_front(n, |slots| slots.fill_with(T::default))
    }

    /// Buang `n` elemen pertama. `n >= len()` sama dengan `reset()`.
    pub fn drop_front(&mut self, n: usize) {
        self.skip(n);
    }

    /// Kosongkan ring dan reset semua slot ke default.
    pub fn reset(&mut self) {
        self.elements.fill_with(T::default);
        self.front = Span::EMPTY;
        self.wrap = Span::EMPTY;
    }

    /// Ganti backing store dengan kapasitas baru.
    ///
    /// Gagal tanpa mutasi jika `capacity < len()`. Jika berhasil, semua
    /// elemen dipindah ke storage baru sebagai satu region `front` mulai
    /// offset 0.
    pub fn resize(&mut self, capacity: usize) -> Result<(), RingError> {
        let len = self.len();
        if capacity < len {
            return Err(RingError::CapacityTooSmall {
                requested: capacity,
                len,
            });
        }

        let mut elements = Vec::with_capacity(capacity);
        let (front, wrap) = (self.front.range(), self.wrap.range());
        elements.extend(self.elements[front].iter_mut().map(mem::take));
        elements.extend(self.elements[wrap].iter_mut().map(mem::take));
        elements.resize_with(capacity, T::default);

        debug!(from = self.elements.len(), to = capacity, len, "ring resized");

        self.elements = elements.into_boxed_slice();
        self.front = Span { start: 0, len };
        self.wrap = Span::EMPTY;
        Ok(())
    }

    /// Tulis langsung ke storage internal lewat callback.
    ///
    /// Callback menerima satu region kosong yang contiguous (sisa `front`
    /// jika ada, selain itu region bebas di `wrap`) dan mengembalikan jumlah
    /// elemen yang diisi. Region ini belum tentu mencakup semua kapasitas
    /// kosong; panggil [`Ring::compact`] dulu untuk memaksimalkannya.
    ///
    /// Callback dipanggil paling banyak sekali, dan tidak dipanggil jika
    /// tidak ada ruang. Jumlah yang melebihi ukuran region ditolak
    /// (dianggap 0).
    pub fn fill<F>(&mut self, f: F) -> usize
    where
        F: FnOnce(&mut [T]) -> usize,
    {
        if self.is_empty() {
            self.front = Span::EMPTY;
            self.wrap = Span::EMPTY;
        }

        let end = self.front.end();
        let (region, into_front) = if end < self.elements.len() {
            (end..self.elements.len(), true)
        } else {
            (self.wrap.len..self.front.start, false)
        };
        if region.is_empty() {
            return 0;
        }

        let size = region.len();
        let filled = f(&mut self.elements[region.clone()]);
        if filled > size {
            warn!(filled, size, "fill callback reported more than offered, rejected");
            self.elements[region].fill_with(T::default);
            return 0;
        }

        if into_front {
            self.front.len += filled;
        } else {
            self.wrap.len += filled;
        }
        filled
    }

    /// Stream-style read: pindahkan sampai `out.len()` elemen ke `out` dan
    /// konsumsi dari ring.
    ///
    /// Returns [`RingError::Eof`] jika ring kosong. Short read bukan error.
    pub fn read_slice(&mut self, out: &mut [T]) -> Result<usize, RingError> {
        if self.is_empty() {
            return Err(RingError::Eof);
        }

        let mut dst = out.iter_mut();
        let n = dst.len();
        Ok(self.consume_front(n, |slots| {
            // slots dulu: zip tidak boleh memajukan `dst` saat chunk habis
            for (from, to) in slots.iter_mut().zip(&mut dst) {
                *to = mem::take(from);
            }
        }))
    }
}

impl<T: Clone> Ring<T> {
    /// Push elemen terdepan dari `items` sebanyak yang muat: sisa `front`
    /// dulu, lalu `wrap`. Returns jumlah yang masuk.
    pub fn push_batch(&mut self, items: &[T]) -> usize {
        let end = self.front.end();
        let n = items.len().min(self.elements.len() - end);
        self.elements[end..end + n].clone_from_slice(&items[..n]);
        self.front.len += n;

        let rest = &items[n..];
        if rest.is_empty() {
            return n;
        }

        // front sudah penuh secara fisik; region bebas = [wrap.len, front.start)
        let at = self.wrap.len;
        let m = rest.len().min(self.front.start - at);
        self.elements[at..at + m].clone_from_slice(&rest[..m]);
        self.wrap.len += m;
        n + m
    }

    /// Copy elemen dalam urutan logis ke `out` tanpa mengkonsumsi.
    /// Returns `min(out.len(), len())`.
    pub fn copy_to(&self, out: &mut [T]) -> usize {
        let (front, wrap) = self.as_slices();
        let n = out.len().min(front.len());
        out[..n].clone_from_slice(&front[..n]);

        let m = (out.len() - n).min(wrap.len());
        out[n..n + m].clone_from_slice(&wrap[..m]);
        n + m
    }

    /// Stream-style write.
    ///
    /// Prefix yang muat tetap ter-commit. Returns [`RingError::Full`] jika
    /// tidak ada ruang sama sekali, [`RingError::ShortWrite`] jika hanya
    /// sebagian yang masuk.
    pub fn write_slice(&mut self, input: &[T]) -> Result<usize, RingError> {
        if input.is_empty() {
            return Ok(0);
        }
        if self.is_full() {
            return Err(RingError::Full);
        }

        let written = self.push_batch(input);
        if written < input.len() {
            return Err(RingError::ShortWrite {
                written,
                requested: input.len(),
            });
        }
        Ok(written)
    }

    /// Copy semua elemen ke `other` lewat `push_batch`, berhenti jika
    /// `other` penuh. Ring ini tidak berubah.
    pub fn write_to(&self, other: &mut Ring<T>) -> usize {
        let (front, wrap) = self.as_slices();
        let n = other.push_batch(front);
        if n < front.len() {
            return n;
        }
        n + other.push_batch(wrap)
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
