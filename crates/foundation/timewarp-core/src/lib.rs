//! # Timewarp Core
//!
//! The timewarp multiplier and the two datasets the analysis page is built from.
//!
//! ```text
//!   tw < 100   ──►  BelowTransition       -(4·(100 − tw)/100)², floored at -0.048
//!   tw ≥ 100   ──►  AtOrAboveTransition   (tw − 100) · 1.02^step / 150
//!                                          step = max(0, ⌊(tw − 100)/5⌋ − 1)
//! ```
//!
//! Both branches meet at zero on the transition point (tw = 100).

pub mod dataset;
pub mod multiplier;

pub use dataset::{samples, Datasets, SampleRow, Sweep, SweepPoint, SAMPLE_INPUTS};
pub use multiplier::{evaluate, Regime, PENALTY_FLOOR, TRANSITION};

/// Result type for timewarp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in timewarp-core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid timewarp input {input}: expected a finite, non-negative number")]
    InvalidInput { input: f64 },
}
