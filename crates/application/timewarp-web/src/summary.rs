//! Dataset checks and the observations listed under the table

use serde::Serialize;
use timewarp_core::{evaluate, Datasets, SweepPoint, TRANSITION};

use crate::error::{RenderError, Result};

/// Extremes of the sweep plus the transition point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub min: SweepPoint,
    pub max: SweepPoint,
    pub transition: SweepPoint,
}

impl Summary {
    /// Compute from a validated sweep. Ties keep the lowest input.
    pub fn from_sweep(sweep: &[SweepPoint]) -> Result<Self> {
        let first = *sweep.first().ok_or(RenderError::EmptySweep)?;

        let (min, max) = sweep.iter().skip(1).fold((first, first), |(min, max), &p| {
            (
                if p.multiplier < min.multiplier { p } else { min },
                if p.multiplier > max.multiplier { p } else { max },
            )
        });

        let transition = SweepPoint {
            input: TRANSITION,
            multiplier: evaluate(TRANSITION)?,
        };

        Ok(Self { min, max, transition })
    }
}

/// Reject datasets a page cannot be built from
pub fn validate(datasets: &Datasets) -> Result<()> {
    let sweep = datasets.sweep();
    if sweep.is_empty() {
        return Err(RenderError::EmptySweep);
    }
    if datasets.samples().is_empty() {
        return Err(RenderError::EmptySamples);
    }

    let values = sweep
        .iter()
        .map(|p| (p.input, p.multiplier))
        .chain(datasets.samples().iter().map(|r| (r.input, r.multiplier)));
    for (input, multiplier) in values {
        if !input.is_finite() || !multiplier.is_finite() {
            return Err(RenderError::NonFinite { input });
        }
    }

    if let Some(index) = sweep.windows(2).position(|w| w[0].input >= w[1].input) {
        return Err(RenderError::Unsorted { index: index + 1 });
    }

    Ok(())
}
