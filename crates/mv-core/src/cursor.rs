//! Time cursor: four coarse/fine adjustments composed into one sample index.
//!
//! Each adjustment is bounded to `sample_count / zoom` for its own zoom
//! divisor, so the coarse input spans the whole run and the finer ones step
//! through progressively smaller windows. The composed sum is clamped, never
//! wrapped.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::units::{Time, as_ms};
use crate::{CoreError, CoreResult};

/// Zoom divisors of the four inputs, coarse to fine.
pub const DEFAULT_ZOOMS: [u32; 4] = [1, 10, 500, 2000];

/// Raw widget values of the four cursor inputs, coarse to fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CursorInputs(pub [i64; 4]);

impl CursorInputs {
    pub fn new(values: [i64; 4]) -> Self {
        Self(values)
    }

    pub fn sum(&self) -> i64 {
        self.0.iter().fold(0_i64, |acc, v| acc.saturating_add(*v))
    }
}

/// Resolved cursor: the sample index and its elapsed simulated time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CursorPosition {
    pub index: usize,
    pub time_ms: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TimeCursor {
    sample_count: usize,
    total_duration: Time,
    zooms: [u32; 4],
}

impl TimeCursor {
    pub fn new(sample_count: usize, total_duration: Time, zooms: [u32; 4]) -> CoreResult<Self> {
        if sample_count == 0 {
            return Err(CoreError::EmptyTable);
        }
        if zooms.contains(&0) {
            return Err(CoreError::InvalidArg {
                what: "zoom divisor must be > 0",
            });
        }
        crate::ensure_finite(as_ms(total_duration), "total duration")?;
        Ok(Self {
            sample_count,
            total_duration,
            zooms,
        })
    }

    pub fn with_default_zooms(sample_count: usize, total_duration: Time) -> CoreResult<Self> {
        Self::new(sample_count, total_duration, DEFAULT_ZOOMS)
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn total_duration(&self) -> Time {
        self.total_duration
    }

    pub fn zooms(&self) -> [u32; 4] {
        self.zooms
    }

    /// Upper bound of each input widget.
    pub fn bounds(&self) -> [i64; 4] {
        self.zooms
            .map(|zoom| (self.sample_count / zoom as usize) as i64)
    }

    /// Clamp each input into `[0, bound]` for its widget.
    pub fn clamp_inputs(&self, inputs: CursorInputs) -> CursorInputs {
        let bounds = self.bounds();
        let mut out = inputs.0;
        for (value, bound) in out.iter_mut().zip(bounds) {
            *value = (*value).clamp(0, bound);
        }
        CursorInputs(out)
    }

    /// Sample index selected by the inputs.
    ///
    /// The sum saturates at `sample_count` and floors at zero, then maps
    /// linearly onto `[0, sample_count - 1]` with half-to-even rounding.
    pub fn index(&self, inputs: CursorInputs) -> usize {
        let n = self.sample_count as i64;
        let clamped = inputs.sum().clamp(0, n);
        let scaled = (n - 1) as f64 * clamped as f64 / n as f64;
        (scaled.round_ties_even() as usize).min(self.sample_count - 1)
    }

    /// Elapsed simulated time at a sample index, in milliseconds.
    pub fn elapsed_ms(&self, index: usize) -> f64 {
        index as f64 / self.sample_count as f64 * as_ms(self.total_duration)
    }

    pub fn position(&self, inputs: CursorInputs) -> CursorPosition {
        let index = self.index(inputs);
        CursorPosition {
            index,
            time_ms: self.elapsed_ms(index),
        }
    }

    /// Position of an explicit sample index, clamped to the table.
    pub fn position_at(&self, index: usize) -> CursorPosition {
        let index = index.min(self.sample_count - 1);
        CursorPosition {
            index,
            time_ms: self.elapsed_ms(index),
        }
    }
}
