//! Simulated scoring values for new assessments.
//!
//! Values are drawn from a [`ScoreSource`], which the registry owns. The
//! production source is [`RandomScores`]; tests use [`SequenceScores`] to
//! get exact, repeatable output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Closed interval a generated score is scaled into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub low: f64,
    pub high: f64,
}

pub const GSD_RANGE: ScoreRange = ScoreRange {
    low: 0.0,
    high: 9.0,
};
pub const CONFIDENCE_RANGE: ScoreRange = ScoreRange {
    low: 0.5,
    high: 1.0,
};
pub const PROCESSING_TIME_RANGE: ScoreRange = ScoreRange {
    low: 0.1,
    high: 2.0,
};

/// Source of uniformly distributed values in `[0.0, 1.0]`.
pub trait ScoreSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Thread-safe random source backed by `StdRng`.
pub struct RandomScores {
    rng: StdRng,
}

impl RandomScores {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomScores {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSource for RandomScores {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..=1.0)
    }
}

/// Deterministic source that cycles through a fixed list of unit values.
#[derive(Debug, Clone)]
pub struct SequenceScores {
    values: Vec<f64>,
    next: usize,
}

impl SequenceScores {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl ScoreSource for SequenceScores {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// The three generated fields of an assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratedScores {
    pub gsd_value: f64,
    pub confidence_score: f64,
    pub processing_time: f64,
}

/// Draw one value in `range`, rounded to two decimals.
pub fn sample(source: &mut dyn ScoreSource, range: ScoreRange) -> f64 {
    let unit = source.next_unit().clamp(0.0, 1.0);
    round2(range.low + unit * (range.high - range.low))
}

/// Draw GSD, confidence and processing time, in that order.
pub fn generate(source: &mut dyn ScoreSource) -> GeneratedScores {
    GeneratedScores {
        gsd_value: sample(source, GSD_RANGE),
        confidence_score: sample(source, CONFIDENCE_RANGE),
        processing_time: sample(source, PROCESSING_TIME_RANGE),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
