// ============================================================================
// Money Module
// Value objects pairing fixed-point amounts with currencies
// ============================================================================

mod allocation;
mod currency;
mod errors;
mod plain;
mod value;

pub use currency::Currency;
pub use errors::{MoneyError, MoneyResult};
pub use plain::PlainMoney;
pub use value::Money;
