// ============================================================================
// Money Errors
// ============================================================================

use super::Currency;
use crate::numeric::NumericError;
use thiserror::Error;

/// Errors returned by `Money` and `PlainMoney` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("invalid amount: value cannot be interpreted as a number")]
    InvalidAmount,

    #[error("invalid operand: an integer is required")]
    InvalidOperand,

    #[error("invalid rounding mode: expected HALF_UP, HALF_DOWN, HALF_EVEN or HALF_ODD")]
    InvalidRoundingMode,

    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot parse {input:?} as a money amount")]
    ParseError { input: String },

    #[error("invalid currency code {0:?}")]
    InvalidCurrency(String),

    #[error("arithmetic overflow")]
    Overflow,

    #[error("arithmetic underflow")]
    Underflow,

    #[error("precision loss: more than two decimal digits")]
    PrecisionLoss,
}

impl From<NumericError> for MoneyError {
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::Overflow => MoneyError::Overflow,
            NumericError::Underflow => MoneyError::Underflow,
            NumericError::DivisionByZero => MoneyError::DivisionByZero,
            NumericError::PrecisionLoss => MoneyError::PrecisionLoss,
            NumericError::InvalidAmount => MoneyError::InvalidAmount,
            NumericError::InvalidOperand => MoneyError::InvalidOperand,
            NumericError::InvalidRoundingMode => MoneyError::InvalidRoundingMode,
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
