//! Sweep and sample datasets built from the multiplier
//!
//! The sweep is the dense integer range drawn as the chart line. The samples
//! are a short hand-picked list shown in the table, each tagged with the
//! formula branch that produced it.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::multiplier::{evaluate, Regime};
use crate::Result;

/// Default chart range, inclusive on both ends
pub const SWEEP_START: i32 = 90;
/// Last input of the default chart range
pub const SWEEP_END: i32 = 150;

/// Inputs listed in the breakdown table
pub const SAMPLE_INPUTS: &[f64] = &[
    90.0, 92.0, 94.0, 95.0, 96.0, 98.0, 99.0, 100.0, 101.0, 103.0, 105.0, 110.0, 115.0, 120.0,
    125.0, 130.0, 140.0, 150.0,
];

/// One point on the chart line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub input: f64,
    pub multiplier: f64,
}

/// One row of the breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub input: f64,
    pub multiplier: f64,
    pub regime: Regime,
}

impl SampleRow {
    pub fn new(input: f64) -> Result<Self> {
        Ok(Self {
            input,
            multiplier: evaluate(input)?,
            regime: Regime::of(input),
        })
    }

    /// Formula description for the table
    pub fn formula(&self) -> &'static str {
        self.regime.formula()
    }
}

/// Dense integer sweep over an inclusive range.
///
/// Iteration is lazy and every call to [`Sweep::iter`] starts from the
/// beginning again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    range: RangeInclusive<i32>,
}

impl Sweep {
    pub fn new(start: i32, end: i32) -> Self {
        Self { range: start..=end }
    }

    /// Number of points the sweep yields
    pub fn len(&self) -> usize {
        self.range.clone().count()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Evaluate each input in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Result<SweepPoint>> + '_ {
        self.range.clone().map(|tw| {
            let input = f64::from(tw);
            evaluate(input).map(|multiplier| SweepPoint { input, multiplier })
        })
    }

    /// Collect the whole sweep, stopping at the first invalid input
    pub fn points(&self) -> Result<Vec<SweepPoint>> {
        self.iter().collect()
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(SWEEP_START, SWEEP_END)
    }
}

/// Build table rows for the given inputs, keeping their order
pub fn samples(inputs: &[f64]) -> Result<Vec<SampleRow>> {
    inputs.iter().map(|&tw| SampleRow::new(tw)).collect()
}

/// Both datasets, computed once and read-only afterwards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datasets {
    sweep: Vec<SweepPoint>,
    samples: Vec<SampleRow>,
}

impl Datasets {
    /// Build from the default sweep range and [`SAMPLE_INPUTS`]
    pub fn build() -> Result<Self> {
        Self::from_parts(&Sweep::default(), SAMPLE_INPUTS)
    }

    pub fn from_parts(sweep: &Sweep, inputs: &[f64]) -> Result<Self> {
        let datasets = Self {
            sweep: sweep.points()?,
            samples: samples(inputs)?,
        };
        tracing::debug!(
            sweep = datasets.sweep.len(),
            samples = datasets.samples.len(),
            "built timewarp datasets"
        );
        Ok(datasets)
    }

    /// Wrap already computed data without re-evaluating it
    pub fn from_raw(sweep: Vec<SweepPoint>, samples: Vec<SampleRow>) -> Self {
        Self { sweep, samples }
    }

    pub fn sweep(&self) -> &[SweepPoint] {
        &self.sweep
    }

    pub fn samples(&self) -> &[SampleRow] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_sweep_shape() {
        let sweep = Sweep::default();
        assert_eq!(sweep.len(), 61);

        let points = sweep.points().unwrap();
        assert_eq!(points.len(), 61);
        assert_eq!(points.first().unwrap().input, 90.0);
        assert_eq!(points.last().unwrap().input, 150.0);
        assert!(points.windows(2).all(|w| w[0].input < w[1].input));
    }

    #[test]
    fn test_sweep_is_restartable() {
        let sweep = Sweep::default();
        let first: Vec<_> = sweep.iter().take(3).collect::<Result<_>>().unwrap();
        let again: Vec<_> = sweep.iter().take(3).collect::<Result<_>>().unwrap();
        assert_eq!(first, again);
        assert_eq!(first[0].input, 90.0);
    }

    #[test]
    fn test_sweep_matches_evaluator() {
        for point in Sweep::default().iter() {
            let point = point.unwrap();
            assert_eq!(point.multiplier, evaluate(point.input).unwrap());
        }
    }

    #[test]
    fn test_empty_sweep() {
        let sweep = Sweep::new(10, 5);
        assert!(sweep.is_empty());
        assert_eq!(sweep.len(), 0);
        assert!(sweep.points().unwrap().is_empty());
    }

    #[test]
    fn test_sweep_rejects_negative_inputs() {
        let err = Sweep::new(-2, 3).points().unwrap_err();
        assert_eq!(err, Error::InvalidInput { input: -2.0 });
    }

    #[test]
    fn test_samples_keep_order_and_regime() {
        let rows = samples(SAMPLE_INPUTS).unwrap();
        assert_eq!(rows.len(), SAMPLE_INPUTS.len());

        for (row, &tw) in rows.iter().zip(SAMPLE_INPUTS) {
            assert_eq!(row.input, tw);
            assert_eq!(row.regime, Regime::of(tw));
        }

        let at_transition = rows.iter().find(|r| r.input == 100.0).unwrap();
        assert_eq!(at_transition.regime, Regime::AtOrAboveTransition);
        assert_eq!(at_transition.multiplier, 0.0);
        assert!(rows[0].formula().contains("[bounded]"));
    }

    #[test]
    fn test_samples_propagate_invalid_input() {
        assert!(samples(&[100.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_build_datasets() {
        let datasets = Datasets::build().unwrap();
        assert_eq!(datasets.sweep().len(), 61);
        assert_eq!(datasets.samples().len(), SAMPLE_INPUTS.len());
    }

    #[test]
    fn test_datasets_serialize() {
        let datasets = Datasets::build().unwrap();
        let json = serde_json::to_value(&datasets).unwrap();
        assert_eq!(json["sweep"].as_array().unwrap().len(), 61);
        assert_eq!(json["samples"][0]["regime"], "below_transition");
    }
}
