// mv-core/src/units.rs

use uom::si::f64::Time as UomTime;

// Public canonical unit types (SI, f64)
pub type Time = UomTime;

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn ms(v: f64) -> Time {
    use uom::si::time::millisecond;
    Time::new::<millisecond>(v)
}

#[inline]
pub fn as_ms(t: Time) -> f64 {
    use uom::si::time::millisecond;
    t.get::<millisecond>()
}

#[inline]
pub fn as_s(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_to_millis() {
        assert!((as_ms(s(2.0)) - 2000.0).abs() < 1e-9);
        assert!((as_s(ms(250.0)) - 0.25).abs() < 1e-12);
    }
}
