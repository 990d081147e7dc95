// ============================================================================
// Fixed-Point Decimal
// Exact fixed-point arithmetic with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::operand::Operand;
use super::rounding::RoundingMode;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 2.
///
/// # Value Range
/// With DECIMALS=2 (default):
/// - Minimum: -92,233,720,368,547,758.08
/// - Maximum: +92,233,720,368,547,758.07
/// - Precision: 0.01 (one cent)
///
/// # Example
/// ```
/// use money_value::numeric::{FixedPointDecimal, RoundingMode};
///
/// let price = FixedPointDecimal::from_integer(100).unwrap(); // 100.00
/// let third = price.checked_div_int(3, RoundingMode::HalfUp).unwrap();
/// assert_eq!(third.to_string(), "33.33");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 2>(i64);

/// Two implied decimal digits: the smallest unit of every currency here.
pub type FixedPointDecimal = FixedDecimal<2>;

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// 10^exp as i128, or `Overflow` past i128 range.
fn pow10_i128(exp: u32) -> NumericResult<i128> {
    10i128.checked_pow(exp).ok_or(NumericError::Overflow)
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(pow10(D));

    /// The smallest positive value (one unit in the last place)
    pub const UNIT: Self = Self(1);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (smallest units).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value (whole units, fractional digits zero).
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional part (must be < SCALE, always positive)
    ///
    /// # Example
    /// ```
    /// use money_value::numeric::FixedPointDecimal;
    ///
    /// let x = FixedPointDecimal::from_parts(123, 45).unwrap();
    /// assert_eq!(x.to_string(), "123.45");
    /// ```
    #[inline]
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if fraction >= Self::SCALE as u64 {
            return Err(NumericError::InvalidAmount);
        }

        let int_scaled = integer
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let frac_signed = if integer < 0 {
            -(fraction as i64)
        } else {
            fraction as i64
        };

        int_scaled
            .checked_add(frac_signed)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from an operand without rounding.
    ///
    /// # Errors
    /// - `PrecisionLoss` if a decimal operand has more than `DECIMALS` significant
    ///   fractional digits
    /// - `Overflow`/`Underflow` if the value is out of range
    pub fn from_operand(operand: Operand) -> NumericResult<Self> {
        match operand {
            Operand::Integer(value) => Self::from_integer(value),
            Operand::Decimal(value) => Self::from_decimal(value),
        }
    }

    /// Create from `mantissa / 10^scale`, failing rather than rounding.
    fn from_scaled(mantissa: i128, scale: u32) -> NumericResult<Self> {
        let target = D as u32;
        let raw = if scale <= target {
            mantissa
                .checked_mul(pow10_i128(target - scale)?)
                .ok_or(NumericError::Overflow)?
        } else {
            let divisor = pow10_i128(scale - target)?;
            if mantissa % divisor != 0 {
                return Err(NumericError::PrecisionLoss);
            }
            mantissa / divisor
        };
        Self::narrow(raw)
    }

    /// Narrow an i128 raw value back into range.
    #[inline]
    fn narrow(raw: i128) -> NumericResult<Self> {
        if raw > i64::MAX as i128 {
            Err(NumericError::Overflow)
        } else if raw < i64::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(raw as i64))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled), i.e. the amount in smallest units.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero, never rounded).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.0 == i64::MIN {
            Err(NumericError::Overflow)
        } else {
            Ok(Self(self.0.abs()))
        }
    }

    /// Checked negation.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Multiply by an integer (no scaling needed, always exact).
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        Self::narrow((self.0 as i128) * (rhs as i128))
    }

    /// Multiply by an integer or decimal factor.
    ///
    /// Integer factors are exact. Decimal factors are multiplied exactly and the
    /// product is rounded once to `DECIMALS` digits with `mode`.
    pub fn multiply_by(self, factor: Operand, mode: RoundingMode) -> NumericResult<Self> {
        match factor {
            Operand::Integer(value) => self.checked_mul_int(value),
            Operand::Decimal(_) => {
                let (mantissa, scale) = factor.to_scaled();
                let product = (self.0 as i128)
                    .checked_mul(mantissa)
                    .ok_or(NumericError::Overflow)?;
                let rounded = mode.divide(product, pow10_i128(scale)?)?;
                Self::narrow(rounded)
            },
        }
    }

    /// Divide by an integer, rounding the quotient to `DECIMALS` digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `divisor` is zero.
    pub fn checked_div_int(self, divisor: i64, mode: RoundingMode) -> NumericResult<Self> {
        let quotient = mode.divide(self.0 as i128, divisor as i128)?;
        Self::narrow(quotient)
    }

    /// Remainder of division by `modulus` whole units.
    ///
    /// The sign follows the dividend: `-7.50 mod 2 = -1.50`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `modulus` is zero.
    pub fn checked_rem_int(self, modulus: i64) -> NumericResult<Self> {
        if modulus == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let scaled = (modulus as i128) * (Self::SCALE as i128);
        Self::narrow((self.0 as i128) % scaled)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two values.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedDecimal<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedDecimal<D> {}

impl<const D: u8> PartialOrd for FixedDecimal<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const D: u8> Ord for FixedDecimal<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Hash for FixedDecimal<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // Handle -0.xx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// Convert from rust_decimal::Decimal without rounding.
    ///
    /// Trailing zeros beyond `DECIMALS` are accepted (`1.2500` is fine for
    /// two digits); any other extra digit is rejected.
    ///
    /// # Errors
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow`/`Underflow` if the value is out of range
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        Self::from_scaled(d.mantissa(), d.scale())
    }

    /// Convert to rust_decimal::Decimal with exactly `DECIMALS` digits.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::new(self.0, D as u32)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse `[sign]digits[separator][fraction]`.
    ///
    /// `sign` is `+` or `-`, `separator` is `.` or `,`, and at most `DECIMALS`
    /// fractional digits follow. Missing fractional digits are zero.
    ///
    /// # Examples
    /// - "123" -> 123.00
    /// - "-12.5" -> -12.50
    /// - "3,4" -> 3.40
    /// - "7." -> 7.00
    ///
    /// # Errors
    /// - `InvalidAmount` for anything outside the grammar
    /// - `PrecisionLoss` for more than `DECIMALS` fractional digits
    /// - `Overflow`/`Underflow` if the value is out of range
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        // Split on the first separator; a second one is rejected below
        let (int_str, frac_str) = match unsigned.find(['.', ',']) {
            Some(pos) => (&unsigned[..pos], &unsigned[pos + 1..]),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_str.is_empty() || !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidAmount);
        }
        if frac_str.len() > D as usize {
            return Err(NumericError::PrecisionLoss);
        }

        let out_of_range = if is_negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };

        // Only digits remain, so a parse failure means the value is too long
        let int_val: i128 = int_str.parse().map_err(|_| out_of_range)?;
        let frac_val: i128 = if frac_str.is_empty() {
            0
        } else {
            // Pad with zeros to reach DECIMALS length
            let padded = format!("{:0<width$}", frac_str, width = D as usize);
            padded.parse().map_err(|_| NumericError::InvalidAmount)?
        };

        let magnitude = int_val
            .checked_mul(Self::SCALE as i128)
            .and_then(|scaled| scaled.checked_add(frac_val))
            .ok_or(out_of_range)?;

        let raw = if is_negative { -magnitude } else { magnitude };
        Self::narrow(raw)
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
impl<const D: u8> serde::Serialize for FixedDecimal<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: u8> serde::Deserialize<'de> for FixedDecimal<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
