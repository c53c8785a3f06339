//! Core module: Fixed-Capacity Ring Buffer dengan dua view
//!
//! Prinsip desain:
//! - No-Allocation: Backing store dialokasikan sekali saat init
//! - No Modulo: Urutan logis = `front` lalu `wrap`, keduanya slice biasa
//! - Zero-Copy: View dan callback bekerja langsung di storage

mod error;
mod iter;
mod limit;
mod ring;
mod stream;

pub use error::RingError;
pub use iter::Iter;
pub use limit::Limit;
pub use ring::Ring;
