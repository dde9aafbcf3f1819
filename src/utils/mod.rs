//! Shared utilities.

mod rounding;

pub use rounding::round2;
