// ============================================================================
// Money Value Library
// Immutable money values on exact fixed-point decimals
// ============================================================================

//! # Money Value
//!
//! Money as an immutable value object: a two-decimal fixed-point amount paired
//! with a currency.
//!
//! ## Features
//!
//! - **Exact arithmetic** on an `i64` count of cents, no floating point
//! - **Currency safety**: mixing currencies is an error, never a silent sum
//! - **Allocation** by ratios or into equal parts, always summing back exactly
//! - **Explicit rounding** with four tie-breaking modes
//! - **Parsing** of `[sign]digits[.|,][d1][d2]` strings into cents
//!
//! ## Example
//!
//! ```rust
//! use money_value::prelude::*;
//!
//! let usd = Currency::new("USD").unwrap();
//! let invoice = Money::parse("1001.00", usd).unwrap();
//!
//! // Split between three payers, first payers absorb the leftover cents
//! let shares = invoice.allocate_to(3).unwrap();
//! assert_eq!(shares[0].to_string(), "333.67 USD");
//! assert_eq!(shares[2].to_string(), "333.66 USD");
//!
//! // Shares always add back up to the original amount
//! let total = Money::sum(shares).unwrap();
//! assert_eq!(total, invoice);
//!
//! // Mixing currencies fails
//! let eur = Currency::new("EUR").unwrap();
//! let euros = Money::new(5, eur).unwrap();
//! assert!(invoice.add(&euros).is_err());
//! ```

pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod money;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::MoneyConfig;
    pub use crate::money::{Currency, Money, MoneyError, MoneyResult, PlainMoney};
    pub use crate::numeric::{FixedDecimal, FixedPointDecimal, Operand, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_split_bill() {
        let config = MoneyConfig::bankers(Currency::new("USD").unwrap());

        // Order total: 3 x 19.99 plus 7.5% tax
        let item = config.parse("19.99").unwrap();
        let subtotal = item.multiply(3, config.rounding_mode).unwrap();
        assert_eq!(subtotal.amount().to_string(), "59.97");

        let tax = subtotal
            .convert_rounded(subtotal.currency(), Decimal::new(75, 3), config.rounding_mode)
            .unwrap();
        assert_eq!(tax.amount().to_string(), "4.50");

        let total = subtotal.add(&tax).unwrap();
        assert_eq!(total.units(), 6447);

        // 60/40 split between two cards
        let split = total.allocate(&[60, 40]).unwrap();
        assert_eq!(split[0].amount().to_string(), "38.68");
        assert_eq!(split[1].amount().to_string(), "25.79");
        assert_eq!(split[0].add(&split[1]).unwrap(), total);

        // Round trip through the text form
        let units = Money::string_to_units(&split[1].amount().to_string()).unwrap();
        assert_eq!(Money::from_units(units, total.currency()), split[1]);
    }
}
