// ============================================================================
// Rounding Modes
// Tie-breaking rules applied when a result has more digits than the scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a quotient that falls between two representable values is resolved.
///
/// Only exact ties are affected by the mode. Anything that is not a tie rounds
/// to the nearest representable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Ties away from zero: 0.125 -> 0.13, -0.125 -> -0.13
    #[default]
    HalfUp,
    /// Ties toward zero: 0.125 -> 0.12, -0.125 -> -0.12
    HalfDown,
    /// Ties to the even neighbour (banker's rounding): 0.125 -> 0.12, 0.135 -> 0.14
    HalfEven,
    /// Ties to the odd neighbour: 0.125 -> 0.13, 0.135 -> 0.13
    HalfOdd,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::HalfOdd => "HALF_ODD",
        }
    }

    /// Divide `numerator` by `denominator` and round the quotient to an
    /// integer using this mode.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `Overflow` for `i128::MIN / -1`
    pub fn divide(self, numerator: i128, denominator: i128) -> NumericResult<i128> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let quotient = numerator
            .checked_div(denominator)
            .ok_or(NumericError::Overflow)?;
        let remainder = numerator % denominator;
        if remainder == 0 {
            return Ok(quotient);
        }

        // Step away from zero, in the direction of the true result
        let step: i128 = if (numerator < 0) != (denominator < 0) {
            -1
        } else {
            1
        };

        // Compare |remainder| with the distance to the next multiple, avoiding 2*|r|
        let rem = remainder.unsigned_abs();
        let rest = denominator.unsigned_abs() - rem;

        let round_away = match rem.cmp(&rest) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => match self {
                RoundingMode::HalfUp => true,
                RoundingMode::HalfDown => false,
                RoundingMode::HalfEven => quotient % 2 != 0,
                RoundingMode::HalfOdd => quotient % 2 == 0,
            },
        };

        if round_away {
            quotient.checked_add(step).ok_or(NumericError::Overflow)
        } else {
            Ok(quotient)
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Parse a mode name such as `HALF_EVEN` or `half-even`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or(NumericError::InvalidRoundingMode)
    }
}
