//! Wire types for coin price responses (REST).

use crate::shared::TickerSymbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response for a single coin quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    pub symbol: TickerSymbol,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<Decimal>,
}

/// REST response for the coin prices list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinPricesResponse {
    /// Currency the prices are denominated in.
    pub currency: TickerSymbol,
    /// Server-side quote time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    pub coins: Vec<CoinResponse>,
    pub total: usize,
}
