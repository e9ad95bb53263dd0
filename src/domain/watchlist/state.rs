//! Watchlist state container — app-owned, SDK-provided update logic.

use super::Coin;
use crate::shared::TickerSymbol;
use chrono::{DateTime, Utc};

/// The ordered list of coins with prices in the selected display currency.
///
/// The app owns instances of this type. The SDK provides update methods:
/// [`Coins::refresh`](crate::domain::watchlist::client::Coins::refresh)
/// replaces the contents wholesale on a successful fetch and leaves them
/// untouched on failure.
#[derive(Debug, Clone)]
pub struct Watchlist {
    coins: Vec<Coin>,
    selected_currency: TickerSymbol,
    last_updated: Option<DateTime<Utc>>,
}

impl Watchlist {
    /// Create an empty watchlist priced in `selected_currency`.
    pub fn new(selected_currency: TickerSymbol) -> Self {
        Self {
            coins: Vec::new(),
            selected_currency,
            last_updated: None,
        }
    }

    /// Replace all coins (e.g. from a REST fetch). Never merged.
    pub fn replace(&mut self, coins: Vec<Coin>, as_of: Option<DateTime<Utc>>) {
        self.coins = coins;
        self.last_updated = as_of;
    }

    /// The coin at `index` in the last successful fetch's list.
    ///
    /// Panics when `index >= len()`; guard via [`len`](Self::len).
    pub fn coin(&self, index: usize) -> &Coin {
        &self.coins[index]
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn selected_currency(&self) -> &TickerSymbol {
        &self.selected_currency
    }

    /// Change the display currency. Does NOT fetch — prices stay denominated
    /// in the previous currency until the caller refreshes explicitly.
    pub fn set_selected_currency(&mut self, currency: TickerSymbol) {
        self.selected_currency = currency;
    }

    /// Server quote time of the last successful fetch, when reported.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}
