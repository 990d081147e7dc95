// ============================================================================
// Currency
// Opaque currency identifier compared by code only
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

/// Three-letter currency code, e.g. `USD`.
///
/// Only equality matters to money arithmetic; registries, symbols and
/// per-currency exponents live elsewhere. Every currency is assumed to have
/// two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(ArrayString<3>);

impl Currency {
    /// Create from an ISO-4217-style code. Lowercase input is normalized.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` unless `code` is exactly three ASCII letters.
    pub fn new(code: &str) -> MoneyResult<Self> {
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(MoneyError::InvalidCurrency(code.to_string()));
        }

        let mut inner = ArrayString::new();
        for c in code.chars() {
            inner.push(c.to_ascii_uppercase());
        }
        Ok(Self(inner))
    }

    pub fn code(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Currency::new(&code).map_err(serde::de::Error::custom)
    }
}
