// ============================================================================
// Numeric Module
// Fixed-point arithmetic for exact monetary calculations
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - FixedPointDecimal: the two-digit instance used for money amounts
// - RoundingMode: tie-breaking rules for division and decimal factors
// - Operand: closed integer/decimal input type
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result
// - Rounding happens once, explicitly, with a named mode
// - Compile-time configurable precision via const generics

mod errors;
mod fixed_decimal;
mod operand;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, FixedPointDecimal};
pub use operand::Operand;
pub use rounding::RoundingMode;
