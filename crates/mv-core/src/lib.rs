//! mv-core: stable foundation for motorviz.
//!
//! Contains:
//! - numeric (Real, finiteness check, binary switch levels)
//! - units (uom SI time + constructors)
//! - sample (one immutable row of the drive time series)
//! - cursor (coarse/fine time cursor -> sample index -> elapsed time)
//! - error (shared error types)

pub mod cursor;
pub mod error;
pub mod numeric;
pub mod sample;
pub mod units;

pub use cursor::{CursorInputs, CursorPosition, DEFAULT_ZOOMS, TimeCursor};
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use sample::SampleRow;
pub use units::*;
