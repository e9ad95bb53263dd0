//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── TickerSymbol ────────────────────────────────────────────────────────────

/// Newtype for ticker symbols identifying a coin or fiat currency
/// (e.g. `"BTC"`, `"USD"`).
///
/// Symbols pass through exactly as received; no case normalization is
/// applied. Case-insensitive matching lives in
/// [`CurrencyCatalog::filtered`](crate::domain::currency::CurrencyCatalog::filtered).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TickerSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TickerSymbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for TickerSymbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TickerSymbol(s.to_string()))
    }
}

impl Serialize for TickerSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TickerSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TickerSymbol(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_symbol_serde() {
        let sym = TickerSymbol::from("BTC");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"BTC\"");
        let back: TickerSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(sym, back);
    }

    #[test]
    fn test_ticker_symbol_display_passes_through() {
        let sym = TickerSymbol::new("usd");
        assert_eq!(sym.to_string(), "usd");
        assert_eq!(sym.as_str(), "usd");
    }
}
