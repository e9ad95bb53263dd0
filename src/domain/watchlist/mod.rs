//! Watchlist domain — coins priced in the selected display currency.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::TickerSymbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::Watchlist;

/// A coin with its price in the currency it was fetched in.
///
/// Immutable once converted from a fetch response; the watchlist replaces
/// its coins wholesale on every successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coin {
    pub symbol: TickerSymbol,
    pub name: String,
    pub price: Decimal,
    /// 24h change in percent, when the backend reports one.
    pub change_24h: Option<Decimal>,
}
