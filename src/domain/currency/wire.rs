//! Wire types for currency catalog responses (REST).

use crate::shared::TickerSymbol;
use serde::{Deserialize, Serialize};

/// REST response for a single currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyResponse {
    pub symbol: TickerSymbol,
    pub name: String,
}

/// REST response for the currency catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrenciesResponse {
    pub currencies: Vec<CurrencyResponse>,
    pub total: usize,
}
