//! In-place right rotation of slices, implemented three ways:
//!
//! - [`strategy::copy`] moves every element through an auxiliary buffer;
//! - [`strategy::reversal`] reverses the whole slice, then each half;
//! - [`strategy::cyclic`] follows the `gcd(k, n)` cycles of `i -> (i + k) % n`.
//!
//! ```
//! use rotate::strategy::Strategy;
//!
//! let mut s = [1, 2, 3, 4, 5, 6, 7];
//! Strategy::Cyclic.rotate(&mut s, 3);
//! assert_eq!(s, [5, 6, 7, 1, 2, 3, 4]);
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod rotator;
pub mod slice_utils;
pub mod strategy;

pub use rotator::Rotator;
pub use strategy::Strategy;
