use crate::CoreError;

/// Floating point type of every sampled quantity
pub type Real = f64;

/// Reject NaN and infinities before they reach the cursor arithmetic.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Interpret a spreadsheet cell as a binary switch level.
///
/// Only exact 0.0 and 1.0 are levels; anything else is `None`.
pub fn as_binary(v: Real) -> Option<bool> {
    if v == 0.0 {
        Some(false)
    } else if v == 1.0 {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_rejects_infinity() {
        let err = ensure_finite(Real::INFINITY, "total duration").unwrap_err();
        assert!(err.to_string().contains("total duration"));
        assert_eq!(ensure_finite(2.0, "total duration"), Ok(2.0));
    }

    #[test]
    fn binary_levels() {
        assert_eq!(as_binary(0.0), Some(false));
        assert_eq!(as_binary(-0.0), Some(false));
        assert_eq!(as_binary(1.0), Some(true));
        assert_eq!(as_binary(0.5), None);
        assert_eq!(as_binary(2.0), None);
        assert_eq!(as_binary(Real::NAN), None);
    }
}
