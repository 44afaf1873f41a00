use std::num::IntErrorKind;

use crate::errors::ValidationError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Parses a raw length field and checks it against `MIN_LENGTH..=MAX_LENGTH`.
///
/// Surrounding whitespace is ignored. Integers too large to represent are
/// still numbers, so they are reported as out of range rather than
/// `NotANumber`.
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    let value = match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::TooLong,
                IntErrorKind::NegOverflow => ValidationError::TooShort,
                _ => ValidationError::NotANumber,
            });
        }
    };

    check_length(value)
}

pub fn check_length(value: i64) -> Result<usize, ValidationError> {
    if value < MIN_LENGTH as i64 {
        return Err(ValidationError::TooShort);
    }

    if value > MAX_LENGTH as i64 {
        return Err(ValidationError::TooLong);
    }

    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn accepts_in_range() {
        assert_eq!(validate_length("8"), Ok(8));
        assert_eq!(validate_length("4"), Ok(4));
        assert_eq!(validate_length("16"), Ok(16));
        assert_eq!(validate_length(" 12\n"), Ok(12));
        assert_eq!(validate_length("+5"), Ok(5));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(validate_length("3"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("0"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("-8"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("17"), Err(ValidationError::TooLong));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(validate_length("abc"), Err(ValidationError::NotANumber));
        assert_eq!(validate_length(""), Err(ValidationError::NotANumber));
        assert_eq!(validate_length("8.5"), Err(ValidationError::NotANumber));
        assert_eq!(validate_length("8a"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn numeric_input_bounds() {
        assert_eq!(check_length(3), Err(ValidationError::TooShort));
        assert_eq!(check_length(4), Ok(4));
        assert_eq!(check_length(16), Ok(16));
        assert_eq!(check_length(17), Err(ValidationError::TooLong));
        assert_eq!(check_length(i64::MIN), Err(ValidationError::TooShort));
        assert_eq!(check_length(i64::MAX), Err(ValidationError::TooLong));
    }

    #[test]
    fn huge_numbers_are_out_of_range() {
        assert_eq!(
            validate_length("99999999999999999999999"),
            Err(ValidationError::TooLong)
        );
        assert_eq!(
            validate_length("-99999999999999999999999"),
            Err(ValidationError::TooShort)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(ValidationError::TooShort.to_string(), "Should be min of 4 Chars");
        assert_eq!(ValidationError::TooLong.to_string(), "Should be max of 16 Chars");
    }

    proptest! {
        #[test]
        fn range_is_inclusive(n in -100i64..100) {
            let result = validate_length(&n.to_string());
            if (4..=16).contains(&n) {
                prop_assert_eq!(result, Ok(n as usize));
            } else if n < 4 {
                prop_assert_eq!(result, Err(ValidationError::TooShort));
            } else {
                prop_assert_eq!(result, Err(ValidationError::TooLong));
            }
        }
    }
}
