//! Currency amount conversion.

use crate::domain::foundation::ValidationError;

/// Converts a decimal amount into integer minor units (cents), rounding to
/// the nearest unit. Only finite, positive amounts are payable.
pub fn to_minor_units(amount: f64) -> Result<i64, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::invalid_format("amount", "not a number"));
    }
    if amount <= 0.0 {
        return Err(ValidationError::invalid_format("amount", "must be positive"));
    }
    let cents = (amount * 100.0).round();
    if cents < 1.0 || cents > i64::MAX as f64 {
        return Err(ValidationError::invalid_format("amount", "out of range"));
    }
    Ok(cents as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_common_amounts() {
        assert_eq!(to_minor_units(25.0).unwrap(), 2500);
        assert_eq!(to_minor_units(19.99).unwrap(), 1999);
        assert_eq!(to_minor_units(0.1 + 0.2).unwrap(), 30);
    }

    #[test]
    fn rejects_non_positive_and_nan() {
        assert!(to_minor_units(0.0).is_err());
        assert!(to_minor_units(-3.0).is_err());
        assert!(to_minor_units(f64::NAN).is_err());
        assert!(to_minor_units(0.001).is_err());
    }

    proptest! {
        #[test]
        fn whole_cent_amounts_convert_exactly(cents in 1i64..100_000_000) {
            let amount = cents as f64 / 100.0;
            prop_assert_eq!(to_minor_units(amount).unwrap(), cents);
        }
    }
}
