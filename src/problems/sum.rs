use crate::utils::error::{Result, WarmupError};

/// Adds two integers.
///
/// A sum that leaves the `i64` range is reported as a range failure instead
/// of wrapping.
pub fn sum(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or_else(|| {
        WarmupError::range_error(
            "a + b",
            format!("{} + {}", a, b),
            "sum overflows a 64-bit integer",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_sum() {
        assert_eq!(sum(2, 3).unwrap(), 5);
        assert_eq!(sum(-10, 4).unwrap(), -6);
        assert_eq!(sum(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_sum_overflow() {
        let err = sum(i64::MAX, 1).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Range);
        assert_eq!(sum(i64::MAX, i64::MIN).unwrap(), -1);
    }
}
