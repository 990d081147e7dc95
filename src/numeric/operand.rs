// ============================================================================
// Operand
// Closed set of numeric inputs accepted at the API boundary
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// A numeric argument to a money operation.
///
/// Operations that need a whole number (multiplier, divisor, number of parts)
/// accept only the `Integer` variant; the tag decides, so `Decimal(3.00)` is
/// still rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Integer(i64),
    Decimal(Decimal),
}

impl Operand {
    /// The integer value, or `InvalidOperand` for decimals.
    pub fn as_integer(self) -> NumericResult<i64> {
        match self {
            Operand::Integer(value) => Ok(value),
            Operand::Decimal(_) => Err(NumericError::InvalidOperand),
        }
    }

    /// Scaled integer form `(mantissa, scale)` with `value = mantissa / 10^scale`.
    pub(crate) fn to_scaled(self) -> (i128, u32) {
        match self {
            Operand::Integer(value) => (value as i128, 0),
            Operand::Decimal(value) => (value.mantissa(), value.scale()),
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Operand::Integer(value) => value < 0,
            Operand::Decimal(value) => value.is_sign_negative() && !value.is_zero(),
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Operand::Integer(value) => value == 0,
            Operand::Decimal(value) => value.is_zero(),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(value: $t) -> Self {
                    Operand::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<Decimal> for Operand {
    #[inline]
    fn from(value: Decimal) -> Self {
        Operand::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(Operand::from(7).as_integer(), Ok(7));
        assert_eq!(Operand::from(7u32).as_integer(), Ok(7));
        assert_eq!(Operand::from(-3i64).as_integer(), Ok(-3));
    }

    #[test]
    fn test_decimal_is_not_an_integer() {
        let whole = Operand::from(Decimal::new(300, 2)); // 3.00
        assert_eq!(whole.as_integer(), Err(NumericError::InvalidOperand));
    }

    #[test]
    fn test_scaled_form() {
        assert_eq!(Operand::from(12).to_scaled(), (12, 0));
        assert_eq!(Operand::from(Decimal::new(125, 2)).to_scaled(), (125, 2));
        assert_eq!(Operand::from(Decimal::new(-5, 1)).to_scaled(), (-5, 1));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Operand::from(-1).is_negative());
        assert!(!Operand::from(0).is_negative());
        assert!(Operand::from(Decimal::new(-1, 2)).is_negative());
        assert!(Operand::from(Decimal::ZERO).is_zero());
        assert!(Operand::from(Decimal::new(0, 3)).is_zero());
    }
}
