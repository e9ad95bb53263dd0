//! Currency domain — the catalog of display currencies.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::TickerSymbol;
use serde::{Deserialize, Serialize};

pub use state::CurrencyCatalog;

/// A display currency the backend can quote prices in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub symbol: TickerSymbol,
    pub name: String,
}
