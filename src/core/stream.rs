//! Byte stream adapter: `std::io` untuk `Ring<u8>`
//!
//! - Read: end-of-data = `Ok(0)`, sesuai konvensi `std::io`
//! - Write: partial write = `Ok(n)`, ring penuh = `ErrorKind::WriteZero`
//! - BufRead: `fill_buf` expose slice `front` langsung (zero-copy)

use std::io::{self, BufRead, Read, Write};

use super::error::RingError;
use super::limit::Limit;
use super::ring::Ring;

impl Read for Ring<u8> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.read_slice(buf) {
            Ok(n) => Ok(n),
            Err(RingError::Eof) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }
}

impl BufRead for Ring<u8> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.as_slices().0)
    }

    fn consume(&mut self, amt: usize) {
        self.skip(amt);
    }
}

impl Write for Ring<u8> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.write_slice(buf) {
            Ok(n) => Ok(n),
            Err(RingError::ShortWrite { written, .. }) => Ok(written),
            Err(err) => Err(err.into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Limit<'_, u8> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.read_slice(buf) {
            Ok(n) => Ok(n),
            Err(RingError::Eof) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }
}
