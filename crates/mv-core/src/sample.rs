//! One row of the precomputed drive time series.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Real;

/// Immutable record of the physical quantities at one sample.
///
/// Switch states stay raw so that a non-binary cell reaches the hexagon
/// sector lookup instead of being coerced here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleRow {
    /// Simulation time of the sample in seconds
    pub time_s: Real,
    /// Commanded stator voltage, d component
    pub u_sd: Real,
    /// Commanded stator voltage, q component
    pub u_sq: Real,
    /// Stator current, d component
    pub i_sd: Real,
    /// Stator current, q component
    pub i_sq: Real,
    /// Reference stator current, d component
    pub i_sd_ref: Real,
    /// Reference stator current, q component
    pub i_sq_ref: Real,
    /// Magnetizing current magnitude
    pub i_mr: Real,
    /// Reference rotor speed
    pub w_r_ref: Real,
    /// Actual rotor speed
    pub w_r: Real,
    /// Electrical torque
    pub t_el: Real,
    /// Load torque
    pub t_load: Real,
    /// Rotor flux angle in radians
    pub theta: Real,
    pub hb1: Real,
    pub hb2: Real,
    pub hb3: Real,
}

impl SampleRow {
    /// Inverter half-bridge states (phase A, B, C) as stored in the table.
    pub fn switch_states(&self) -> [Real; 3] {
        [self.hb1, self.hb2, self.hb3]
    }
}
