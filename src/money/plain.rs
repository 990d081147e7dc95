// ============================================================================
// Plain Money
// Currency-less money value for contexts that track currency externally
// ============================================================================

use super::allocation;
use super::errors::{MoneyError, MoneyResult};
use super::{Currency, Money};
use crate::numeric::{FixedPointDecimal, Operand, RoundingMode};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Money amount without a currency.
///
/// Arithmetic and allocation behave exactly like [`Money`]; there are simply
/// no currency checks. Ordering is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlainMoney {
    amount: FixedPointDecimal,
}

impl PlainMoney {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from whole units (integer) or an exact decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` for decimals with more than two significant digits
    /// - `Overflow`/`Underflow` if the value is out of range
    pub fn new(amount: impl Into<Operand>) -> MoneyResult<Self> {
        let amount = FixedPointDecimal::from_operand(amount.into())?;
        Ok(Self { amount })
    }

    /// Create from text such as `"12.50"` or `"-3,4"`.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `text` is not a number.
    pub fn parse(text: &str) -> MoneyResult<Self> {
        let amount = text.parse::<FixedPointDecimal>()?;
        Ok(Self { amount })
    }

    pub const fn from_decimal(amount: FixedPointDecimal) -> Self {
        Self { amount }
    }

    /// Create from a count of smallest units (cents).
    pub const fn from_units(units: i64) -> Self {
        Self {
            amount: FixedPointDecimal::from_raw(units),
        }
    }

    pub const fn zero() -> Self {
        Self::from_units(0)
    }

    /// Attach a currency.
    pub const fn with_currency(self, currency: Currency) -> Money {
        Money::from_decimal(self.amount, currency)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub const fn amount(&self) -> FixedPointDecimal {
        self.amount
    }

    /// Amount in smallest units.
    pub const fn units(&self) -> i64 {
        self.amount.raw_value()
    }

    /// Whole-unit part of the amount; cents are discarded, not rounded.
    pub const fn whole_units(&self) -> i64 {
        self.amount.integer_part()
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

    pub fn compare(&self, other: &Self) -> Ordering {
        self.amount.compare(&other.amount)
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn add(&self, addend: &Self) -> MoneyResult<Self> {
        let amount = self.amount.checked_add(addend.amount)?;
        Ok(Self { amount })
    }

    pub fn subtract(&self, subtrahend: &Self) -> MoneyResult<Self> {
        let amount = self.amount.checked_sub(subtrahend.amount)?;
        Ok(Self { amount })
    }

    /// Multiply by an integer.
    ///
    /// `mode` is applied by the decimal multiply; an integer product is always
    /// exact, so it only matters once rounding is actually needed.
    ///
    /// # Errors
    /// Returns `InvalidOperand` for a decimal multiplier.
    pub fn multiply(&self, multiplier: impl Into<Operand>, mode: RoundingMode) -> MoneyResult<Self> {
        let multiplier = multiplier.into();
        multiplier.as_integer()?;
        let amount = self.amount.multiply_by(multiplier, mode)?;
        Ok(Self { amount })
    }

    /// Divide by an integer, rounding half-up.
    ///
    /// # Errors
    /// - `InvalidOperand` for a decimal divisor
    /// - `DivisionByZero` for a zero divisor
    pub fn divide(&self, divisor: impl Into<Operand>) -> MoneyResult<Self> {
        self.divide_rounded(divisor, RoundingMode::HalfUp)
    }

    pub fn divide_rounded(
        &self,
        divisor: impl Into<Operand>,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let divisor = divisor.into().as_integer()?;
        let amount = self.amount.checked_div_int(divisor, mode)?;
        Ok(Self { amount })
    }

    /// Remainder after dividing by `divisor` whole units.
    pub fn modulo(&self, divisor: impl Into<Operand>) -> MoneyResult<Self> {
        let divisor = divisor.into().as_integer()?;
        let amount = self.amount.checked_rem_int(divisor)?;
        Ok(Self { amount })
    }

    /// Multiply by a non-negative exchange rate and attach `target`.
    pub fn convert(
        &self,
        target: Currency,
        rate: Decimal,
        mode: RoundingMode,
    ) -> MoneyResult<Money> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(MoneyError::InvalidOperand);
        }
        let amount = self.amount.multiply_by(Operand::Decimal(rate), mode)?;

        tracing::trace!(
            from = %self.amount,
            to = %amount,
            %rate,
            currency = %target,
            "converted amount"
        );

        Ok(Money::from_decimal(amount, target))
    }

    pub fn absolute(&self) -> MoneyResult<Self> {
        let amount = self.amount.abs()?;
        Ok(Self { amount })
    }

    pub fn negative(&self) -> MoneyResult<Self> {
        let amount = self.amount.checked_neg()?;
        Ok(Self { amount })
    }

    /// `self / other` as an exact-as-possible decimal ratio.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `other` is zero.
    pub fn ratio_of(&self, other: &Self) -> MoneyResult<Decimal> {
        if other.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Decimal::from(self.units())
            .checked_div(Decimal::from(other.units()))
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    /// Split proportionally to `ratios`; shares sum to `self` exactly.
    ///
    /// # Errors
    /// - `InvalidOperand` for an empty list or a negative ratio
    /// - `DivisionByZero` if all ratios are zero
    pub fn allocate<R>(&self, ratios: &[R]) -> MoneyResult<Vec<Self>>
    where
        R: Into<Operand> + Copy,
    {
        let ratios: Vec<Operand> = ratios.iter().map(|ratio| (*ratio).into()).collect();
        let shares = allocation::allocate(self.amount, &ratios)?;
        Ok(shares.into_iter().map(Self::from_decimal).collect())
    }

    /// Split into `parts` shares differing by at most one cent.
    ///
    /// # Errors
    /// - `InvalidOperand` for a decimal or negative `parts`, or more than one
    ///   million parts
    /// - `DivisionByZero` for zero `parts`
    pub fn allocate_to(&self, parts: impl Into<Operand>) -> MoneyResult<Vec<Self>> {
        let parts = parts.into().as_integer()?;
        let shares = allocation::allocate_to(self.amount, parts)?;
        Ok(shares.into_iter().map(Self::from_decimal).collect())
    }
}

impl fmt::Display for PlainMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}
