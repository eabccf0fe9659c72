use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Like [`ensure_finite`], but also rejects negative values.
pub fn ensure_non_negative(v: Real, what: &'static str) -> CoreResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CoreError::OutOfRange {
            what,
            value: v,
            expected: ">= 0",
        });
    }
    Ok(v)
}

/// Like [`ensure_finite`], but requires a strictly positive value.
pub fn ensure_positive(v: Real, what: &'static str) -> CoreResult<Real> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(CoreError::OutOfRange {
            what,
            value: v,
            expected: "> 0",
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert!(ensure_non_negative(0.0, "mass").is_ok());
        assert!(ensure_non_negative(-1e-9, "mass").is_err());
        assert!(ensure_non_negative(Real::INFINITY, "mass").is_err());
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(0.0, "dt").is_err());
        assert!(ensure_positive(1e-6, "dt").is_ok());
        let msg = format!("{}", ensure_positive(-2.0, "dt").unwrap_err());
        assert!(msg.contains("dt"));
        assert!(msg.contains("-2"));
    }
}
