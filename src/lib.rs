//! Splitring - Fixed-Capacity Ring Buffer
//!
//! Arsitektur:
//! - Single allocation: satu backing store, tidak pernah realokasi kecuali `resize`
//! - Two views: `front` + `wrap`, tanpa aritmetika modulo
//! - Zero-copy: `Limit`, `fill`, dan `BufRead` langsung ke storage internal
//! - Not thread-safe: sinkronisasi dilakukan oleh pemanggil

pub mod core;

pub use crate::core::{Iter, Limit, Ring, RingError};
