//! Inverter switching state to hexagon direction.
//!
//! The three half-bridge states form a 3-bit key. Six keys select one of the
//! six active voltage vectors; `000` and `111` both select the zero vector.
//! The lookup is an exhaustive `match` over the three levels, so coverage of
//! all eight keys is checked by the compiler. Raw table values that are not
//! exact 0/1 levels never reach the lookup and are reported as
//! [`SectorSelection::Invalid`].

use mv_core::as_binary;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{GeometryError, GeometryResult};

/// Direction selected by a switching state.
///
/// `Vk` points at `theta + k*pi/3`, so `V1`..`V5` sit on spokes 1..5 and `V6`
/// closes the turn on spoke 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum HexVector {
    Zero,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
}

impl HexVector {
    pub const ACTIVE: [HexVector; 6] = [
        HexVector::V1,
        HexVector::V2,
        HexVector::V3,
        HexVector::V4,
        HexVector::V5,
        HexVector::V6,
    ];

    /// Spoke index `k`, or `None` for the zero vector.
    pub fn spoke(self) -> Option<usize> {
        match self {
            HexVector::Zero => None,
            HexVector::V1 => Some(1),
            HexVector::V2 => Some(2),
            HexVector::V3 => Some(3),
            HexVector::V4 => Some(4),
            HexVector::V5 => Some(5),
            HexVector::V6 => Some(0),
        }
    }
}

/// Three half-bridge levels (phase A, B, C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SwitchKey {
    pub a: bool,
    pub b: bool,
    pub c: bool,
}

impl SwitchKey {
    pub const fn new(a: bool, b: bool, c: bool) -> Self {
        Self { a, b, c }
    }

    /// Key from raw table values; `None` unless all three are exact levels.
    pub fn from_raw(raw: [f64; 3]) -> Option<Self> {
        Some(Self::new(
            as_binary(raw[0])?,
            as_binary(raw[1])?,
            as_binary(raw[2])?,
        ))
    }

    pub fn from_bits(bits: u8) -> Self {
        Self::new(bits & 0b100 != 0, bits & 0b010 != 0, bits & 0b001 != 0)
    }

    pub fn bits(self) -> u8 {
        (u8::from(self.a) << 2) | (u8::from(self.b) << 1) | u8::from(self.c)
    }

    pub fn all() -> [SwitchKey; 8] {
        std::array::from_fn(|bits| SwitchKey::from_bits(bits as u8))
    }

    pub fn vector(self) -> HexVector {
        match (self.a, self.b, self.c) {
            (false, false, false) => HexVector::Zero,
            (false, true, true) => HexVector::V1,
            (false, false, true) => HexVector::V2,
            (true, false, true) => HexVector::V3,
            (true, false, false) => HexVector::V4,
            (true, true, false) => HexVector::V5,
            (false, true, false) => HexVector::V6,
            (true, true, true) => HexVector::Zero,
        }
    }
}

/// The full table as `(a, b, c) -> vector`, for listing and checks.
pub const SECTOR_TABLE: [([u8; 3], HexVector); 8] = [
    ([0, 0, 0], HexVector::Zero),
    ([0, 1, 1], HexVector::V1),
    ([0, 0, 1], HexVector::V2),
    ([1, 0, 1], HexVector::V3),
    ([1, 0, 0], HexVector::V4),
    ([1, 1, 0], HexVector::V5),
    ([0, 1, 0], HexVector::V6),
    ([1, 1, 1], HexVector::Zero),
];

/// Outcome of the sector lookup for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SectorSelection {
    Active { key: SwitchKey, vector: HexVector },
    Invalid { raw: [f64; 3] },
}

impl SectorSelection {
    pub fn select(raw: [f64; 3]) -> Self {
        match SwitchKey::from_raw(raw) {
            Some(key) => SectorSelection::Active {
                key,
                vector: key.vector(),
            },
            None => SectorSelection::Invalid { raw },
        }
    }

    pub fn vector(&self) -> GeometryResult<HexVector> {
        match self {
            SectorSelection::Active { vector, .. } => Ok(*vector),
            SectorSelection::Invalid { raw } => {
                Err(GeometryError::UnreachableSector { raw: *raw })
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, SectorSelection::Active { .. })
    }
}
