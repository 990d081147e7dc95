// ============================================================================
// Money Configuration
// Default currency and rounding behaviour for a money context
// ============================================================================

use crate::money::{Currency, Money, MoneyError, MoneyResult};
use crate::numeric::{Operand, RoundingMode};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defaults applied when creating and dividing money in one context
/// (a ledger, a checkout, a report).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyConfig {
    /// Currency given to amounts created through this config
    pub currency: Currency,

    /// Rounding applied by `divide` and `convert`
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding_mode: RoundingMode,
}

impl MoneyConfig {
    /// Create a new configuration rounding half-up
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            rounding_mode: RoundingMode::HalfUp,
        }
    }

    /// Builder method: Set the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builder method: Set the rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set the rounding mode by name (`HALF_UP`, `HALF_EVEN`, ...)
    ///
    /// # Errors
    /// Returns `InvalidRoundingMode` for an unknown name.
    pub fn with_rounding_mode_name(self, name: &str) -> MoneyResult<Self> {
        let mode = name.parse::<RoundingMode>()?;
        Ok(self.with_rounding_mode(mode))
    }

    // ========================================================================
    // Context Operations
    // ========================================================================

    /// Create money in the configured currency.
    pub fn money(&self, amount: impl Into<Operand>) -> MoneyResult<Money> {
        Money::new(amount, self.currency)
    }

    /// Parse money in the configured currency.
    pub fn parse(&self, text: &str) -> MoneyResult<Money> {
        Money::parse(text, self.currency)
    }

    /// Divide using the configured rounding mode.
    pub fn divide(&self, money: &Money, divisor: impl Into<Operand>) -> MoneyResult<Money> {
        money.divide_rounded(divisor, self.rounding_mode)
    }

    /// Convert into the configured currency using the configured rounding mode.
    pub fn convert_in(&self, money: &Money, rate: Decimal) -> MoneyResult<Money> {
        money.convert_rounded(self.currency, rate, self.rounding_mode)
    }

    /// Re-check a value that entered from outside this context.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` for money in another currency.
    pub fn accept(&self, money: Money) -> MoneyResult<Money> {
        if money.currency() == self.currency {
            Ok(money)
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: money.currency(),
            })
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// Commercial rounding
    /// - Ties away from zero (HALF_UP)
    pub fn commercial(currency: Currency) -> Self {
        Self::new(currency).with_rounding_mode(RoundingMode::HalfUp)
    }

    /// Banker's rounding
    /// - Ties to even (HALF_EVEN), no drift over many roundings
    pub fn bankers(currency: Currency) -> Self {
        Self::new(currency).with_rounding_mode(RoundingMode::HalfEven)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        Currency::new("USD").unwrap()
    }

    #[test]
    fn test_config_creation() {
        let config = MoneyConfig::new(usd());

        assert_eq!(config.currency, usd());
        assert_eq!(config.rounding_mode, RoundingMode::HalfUp);
    }

    #[test]
    fn test_builder_pattern() {
        let eur = Currency::new("EUR").unwrap();
        let config = MoneyConfig::new(usd())
            .with_currency(eur)
            .with_rounding_mode(RoundingMode::HalfOdd);

        assert_eq!(config.currency, eur);
        assert_eq!(config.rounding_mode, RoundingMode::HalfOdd);
    }

    #[test]
    fn test_rounding_mode_by_name() {
        let config = MoneyConfig::new(usd())
            .with_rounding_mode_name("half_even")
            .unwrap();
        assert_eq!(config.rounding_mode, RoundingMode::HalfEven);

        assert_eq!(
            MoneyConfig::new(usd()).with_rounding_mode_name("ROUND_CEILING"),
            Err(MoneyError::InvalidRoundingMode)
        );
    }

    #[test]
    fn test_preset_configs() {
        let commercial = MoneyConfig::commercial(usd());
        let bankers = MoneyConfig::bankers(usd());

        let quarter = commercial.parse("0.25").unwrap();
        assert_eq!(commercial.divide(&quarter, 2).unwrap().units(), 13);
        assert_eq!(bankers.divide(&quarter, 2).unwrap().units(), 12);
    }

    #[test]
    fn test_context_operations() {
        let config = MoneyConfig::new(usd());
        let money = config.money(42).unwrap();
        assert_eq!(money.currency(), usd());
        assert_eq!(config.accept(money), Ok(money));

        let eur = Currency::new("EUR").unwrap();
        let euros = Money::new(10, eur).unwrap();
        assert!(matches!(
            config.accept(euros),
            Err(MoneyError::CurrencyMismatch { .. })
        ));

        let converted = config.convert_in(&euros, Decimal::new(108, 2)).unwrap();
        assert_eq!(converted, config.parse("10.80").unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_config() {
        let config: MoneyConfig =
            serde_json::from_str(r#"{"currency":"usd","rounding_mode":"HALF_EVEN"}"#).unwrap();
        assert_eq!(config, MoneyConfig::bankers(usd()));

        let defaulted: MoneyConfig = serde_json::from_str(r#"{"currency":"USD"}"#).unwrap();
        assert_eq!(defaulted.rounding_mode, RoundingMode::HalfUp);

        assert!(serde_json::from_str::<MoneyConfig>(r#"{"currency":"DOLLARS"}"#).is_err());
    }
}
