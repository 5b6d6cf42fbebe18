//! The timewarp multiplier formula

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Input at which the formula switches branches and evaluates to zero
pub const TRANSITION: f64 = 100.0;

/// Quadratic penalty scale `k` for inputs below the transition
pub const PENALTY_SCALE: f64 = 4.0;

/// Lowest value the below-transition branch can reach
pub const PENALTY_FLOOR: f64 = -0.048;

/// Width of one compounding step above the transition
pub const BONUS_STEP: f64 = 5.0;

/// Growth applied once per completed step after the first
pub const BONUS_GROWTH: f64 = 1.02;

/// Scales the reward branch down to multiplier range
pub const BONUS_DIVISOR: f64 = 150.0;

/// Which branch of the formula applies to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// tw < 100: capped quadratic penalty
    BelowTransition,
    /// tw >= 100: linear reward with a stepped compounding bonus
    AtOrAboveTransition,
}

impl Regime {
    /// Pick the regime for an input
    pub fn of(input: f64) -> Self {
        if input < TRANSITION {
            Regime::BelowTransition
        } else {
            Regime::AtOrAboveTransition
        }
    }

    /// Evaluate this branch without validating the input or the regime.
    ///
    /// Both branches return zero at [`TRANSITION`].
    pub fn apply(self, input: f64) -> f64 {
        match self {
            Regime::BelowTransition => {
                let penalty = (PENALTY_SCALE * (TRANSITION - input) / 100.0).powi(2);
                -penalty.min(-PENALTY_FLOOR)
            }
            Regime::AtOrAboveTransition => {
                (input - TRANSITION) * growth_factor(input) / BONUS_DIVISOR
            }
        }
    }

    /// Human-readable formula shown next to each sample row
    pub fn formula(self) -> &'static str {
        match self {
            Regime::BelowTransition => "-(4 * (100 - tw) / 100)² [bounded]",
            Regime::AtOrAboveTransition => {
                "(tw - 100) * pow(1.02, max(0, (tw - 100) // 5 - 1)) / 150"
            }
        }
    }
}

/// `1.02^max(0, floor((tw - 100) / 5) - 1)`
fn growth_factor(input: f64) -> f64 {
    let steps = ((input - TRANSITION) / BONUS_STEP).floor() - 1.0;
    BONUS_GROWTH.powi(steps.max(0.0) as i32)
}

/// Compute the multiplier for a timewarp input.
///
/// Fails with [`Error::InvalidInput`] for NaN, infinite or negative inputs,
/// and for inputs so large the compounding bonus overflows.
pub fn evaluate(input: f64) -> Result<f64> {
    if !input.is_finite() || input < 0.0 {
        return Err(Error::InvalidInput { input });
    }
    let multiplier = Regime::of(input).apply(input);
    if !multiplier.is_finite() {
        return Err(Error::InvalidInput { input });
    }
    Ok(multiplier)
}
