/// Values with a magnitude below this are treated as zero (about 2^-40).
pub const ACCURACY: f64 = 1e-12;

/// Returns true if `value` is zero within [`ACCURACY`].
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() < ACCURACY
}

/// Snaps values within [`ACCURACY`] of zero to exactly zero.
#[inline]
pub fn align_zero(value: f64) -> f64 {
    if is_zero(value) {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(1e-13));
        assert!(is_zero(-1e-13));
        assert!(!is_zero(1e-6));
    }

    #[test]
    fn test_align_zero() {
        assert_eq!(align_zero(1e-14), 0.0);
        assert_eq!(align_zero(-1e-14), 0.0);
        assert_eq!(align_zero(0.5), 0.5);
        assert_eq!(align_zero(-2.0), -2.0);
    }
}
