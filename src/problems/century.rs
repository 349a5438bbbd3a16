use crate::utils::error::{Result, WarmupError};

/// Century a year belongs to: years 1..=100 are the first century.
///
/// Uses floor division, so year 0 falls in century 0.
pub fn century_from_year(year: i64) -> Result<i64> {
    if year < 0 {
        return Err(WarmupError::range_error("year", year, "year must not be negative"));
    }

    Ok((year - 1).div_euclid(100) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_century_boundaries() {
        assert_eq!(century_from_year(1).unwrap(), 1);
        assert_eq!(century_from_year(100).unwrap(), 1);
        assert_eq!(century_from_year(101).unwrap(), 2);
        assert_eq!(century_from_year(2000).unwrap(), 20);
        assert_eq!(century_from_year(2001).unwrap(), 21);
    }

    #[test]
    fn test_year_zero_floors() {
        assert_eq!(century_from_year(0).unwrap(), 0);
    }

    #[test]
    fn test_negative_year() {
        let err = century_from_year(-1).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Range);
    }
}
