// ============================================================================
// Money
// Amount + currency value object with currency-safe operations
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::{Currency, PlainMoney};
use crate::numeric::{FixedPointDecimal, NumericError, Operand, RoundingMode};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable amount of money in a single currency.
///
/// Amounts carry exactly two decimal places. Binary operations between two
/// `Money` values require the same currency and fail with
/// `CurrencyMismatch` otherwise; `convert` is the only way to change currency.
///
/// # Example
/// ```
/// use money_value::money::{Currency, Money};
///
/// let usd = Currency::new("USD").unwrap();
/// let bill = Money::new(1000, usd).unwrap();
///
/// let shares = bill.allocate(&[1, 1, 1]).unwrap();
/// let rendered: Vec<String> = shares.iter().map(|s| s.amount().to_string()).collect();
/// assert_eq!(rendered, ["333.34", "333.33", "333.33"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    amount: FixedPointDecimal,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from whole units (integer) or an exact decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` for decimals with more than two significant digits
    /// - `Overflow`/`Underflow` if the value is out of range
    pub fn new(amount: impl Into<Operand>, currency: Currency) -> MoneyResult<Self> {
        Ok(PlainMoney::new(amount)?.with_currency(currency))
    }

    /// Create from text such as `"12.50"`.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `text` is not a number.
    pub fn parse(text: &str, currency: Currency) -> MoneyResult<Self> {
        Ok(PlainMoney::parse(text)?.with_currency(currency))
    }

    pub const fn from_decimal(amount: FixedPointDecimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create from a count of smallest units (cents).
    pub const fn from_units(units: i64, currency: Currency) -> Self {
        Self::from_decimal(FixedPointDecimal::from_raw(units), currency)
    }

    pub const fn zero(currency: Currency) -> Self {
        Self::from_units(0, currency)
    }

    /// Parse `[sign]digits[separator][d1][d2]` into smallest units.
    ///
    /// `sign` is `+` or `-`, `separator` is `.` or `,`, and up to two decimal
    /// digits follow, missing ones counting as zero.
    ///
    /// ```
    /// use money_value::money::Money;
    ///
    /// assert_eq!(Money::string_to_units("-12.5").unwrap(), -1250);
    /// assert_eq!(Money::string_to_units("3,4").unwrap(), 340);
    /// assert!(Money::string_to_units("1.234").is_err());
    /// ```
    ///
    /// # Errors
    /// - `ParseError` if `text` does not match the grammar
    /// - `Overflow`/`Underflow` if the value does not fit in i64 units
    pub fn string_to_units(text: &str) -> MoneyResult<i64> {
        text.parse::<FixedPointDecimal>()
            .map(FixedPointDecimal::raw_value)
            .map_err(|err| match err {
                NumericError::Overflow => MoneyError::Overflow,
                NumericError::Underflow => MoneyError::Underflow,
                _ => MoneyError::ParseError {
                    input: text.to_string(),
                },
            })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub const fn amount(&self) -> FixedPointDecimal {
        self.amount
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Amount in smallest units.
    pub const fn units(&self) -> i64 {
        self.amount.raw_value()
    }

    /// Whole-unit part of the amount; cents are discarded, not rounded.
    pub const fn whole_units(&self) -> i64 {
        self.amount.integer_part()
    }

    /// Drop the currency.
    pub const fn plain(&self) -> PlainMoney {
        PlainMoney::from_decimal(self.amount)
    }

    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub const fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    pub const fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            })
        }
    }

    /// Order by amount.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.compare(&other.amount))
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn add(&self, addend: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(addend)?;
        Ok(self.with_plain(self.plain().add(&addend.plain())?))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn subtract(&self, subtrahend: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(subtrahend)?;
        Ok(self.with_plain(self.plain().subtract(&subtrahend.plain())?))
    }

    /// Multiply by an integer.
    ///
    /// # Errors
    /// Returns `InvalidOperand` for a decimal multiplier.
    pub fn multiply(
        &self,
        multiplier: impl Into<Operand>,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        Ok(self.with_plain(self.plain().multiply(multiplier, mode)?))
    }

    /// Divide by an integer, rounding half-up.
    ///
    /// # Errors
    /// - `InvalidOperand` for a decimal divisor
    /// - `DivisionByZero` for a zero divisor
    pub fn divide(&self, divisor: impl Into<Operand>) -> MoneyResult<Money> {
        Ok(self.with_plain(self.plain().divide(divisor)?))
    }

    pub fn divide_rounded(
        &self,
        divisor: impl Into<Operand>,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        Ok(self.with_plain(self.plain().divide_rounded(divisor, mode)?))
    }

    /// Remainder after dividing by `divisor` whole units.
    pub fn modulo(&self, divisor: impl Into<Operand>) -> MoneyResult<Money> {
        Ok(self.with_plain(self.plain().modulo(divisor)?))
    }

    /// Convert into `target` at `rate`, rounding half-up.
    pub fn convert(&self, target: Currency, rate: Decimal) -> MoneyResult<Money> {
        self.convert_rounded(target, rate, RoundingMode::HalfUp)
    }

    /// Convert into `target` at `rate`. No currency check applies.
    ///
    /// # Errors
    /// - `InvalidOperand` for a negative rate
    /// - `Overflow`/`Underflow` if the result is out of range
    pub fn convert_rounded(
        &self,
        target: Currency,
        rate: Decimal,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        self.plain().convert(target, rate, mode)
    }

    pub fn absolute(&self) -> MoneyResult<Money> {
        Ok(self.with_plain(self.plain().absolute()?))
    }

    pub fn negative(&self) -> MoneyResult<Money> {
        Ok(self.with_plain(self.plain().negative()?))
    }

    /// `self / other` as a decimal ratio.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `DivisionByZero` if `other` is zero
    pub fn ratio_of(&self, other: &Money) -> MoneyResult<Decimal> {
        self.ensure_same_currency(other)?;
        self.plain().ratio_of(&other.plain())
    }

    fn with_plain(&self, plain: PlainMoney) -> Money {
        plain.with_currency(self.currency)
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    /// Split proportionally to `ratios`, preserving order and currency.
    ///
    /// Shares are rounded half-up, then the leftover cents are handed out one
    /// at a time in ratio order, so the shares always sum to `self`.
    ///
    /// # Errors
    /// - `InvalidOperand` for an empty list or a negative ratio
    /// - `DivisionByZero` if all ratios are zero
    pub fn allocate<R>(&self, ratios: &[R]) -> MoneyResult<Vec<Money>>
    where
        R: Into<Operand> + Copy,
    {
        let shares = self.plain().allocate(ratios)?;
        Ok(shares
            .into_iter()
            .map(|share| share.with_currency(self.currency))
            .collect())
    }

    /// Split into `parts` equal shares; the first shares absorb the remainder.
    ///
    /// # Errors
    /// - `InvalidOperand` for a decimal or negative `parts`, or more than one
    ///   million parts
    /// - `DivisionByZero` for zero `parts`
    pub fn allocate_to(&self, parts: impl Into<Operand>) -> MoneyResult<Vec<Money>> {
        let shares = self.plain().allocate_to(parts)?;
        Ok(shares
            .into_iter()
            .map(|share| share.with_currency(self.currency))
            .collect())
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Sum of all values.
    ///
    /// # Errors
    /// - `InvalidOperand` if `values` is empty
    /// - `CurrencyMismatch` if the currencies differ
    pub fn sum<I>(values: I) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        Self::fold(values, |acc, next| acc.add(&next))
    }

    /// Smallest value; the first one wins ties.
    pub fn min<I>(values: I) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        Self::fold(values, |acc, next| {
            Ok(if next.less_than(&acc)? { next } else { acc })
        })
    }

    /// Largest value; the first one wins ties.
    pub fn max<I>(values: I) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        Self::fold(values, |acc, next| {
            Ok(if next.greater_than(&acc)? { next } else { acc })
        })
    }

    fn fold<I, F>(values: I, mut step: F) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = Money>,
        F: FnMut(Money, Money) -> MoneyResult<Money>,
    {
        let mut iter = values.into_iter();
        let first = iter.next().ok_or(MoneyError::InvalidOperand)?;
        iter.try_fold(first, |acc, next| step(acc, next))
    }
}

impl PartialOrd for Money {
    /// `None` across currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
