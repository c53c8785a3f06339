use std::io;
use thiserror::Error;

/// Error untuk operasi stream dan resize pada [`Ring`](super::Ring).
///
/// Push/pop/peek tidak memakai tipe ini: penuh/kosong di sana adalah
/// hasil normal (`bool` / `Option`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    #[error("end of data: ring is empty")]
    Eof,

    #[error("no space: ring is full")]
    Full,

    #[error("short write: {written} of {requested} elements fit")]
    ShortWrite { written: usize, requested: usize },

    #[error("cannot resize to {requested}: ring holds {len} elements")]
    CapacityTooSmall { requested: usize, len: usize },
}

impl RingError {
    /// Jumlah elemen yang tetap ter-commit walaupun write gagal
    pub fn written(&self) -> usize {
        match self {
            RingError::ShortWrite { written, .. } => *written,
            _ => 0,
        }
    }
}

impl From<RingError> for io::Error {
    fn from(err: RingError) -> Self {
        let kind = match err {
            RingError::Eof => io::ErrorKind::UnexpectedEof,
            RingError::Full | RingError::ShortWrite { .. } => io::ErrorKind::WriteZero,
            RingError::CapacityTooSmall { .. } => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
