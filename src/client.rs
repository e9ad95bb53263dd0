//! High-level client — `CoinwatchClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the accessor methods, and the selection glue
//! tying preferences, watchlist, and fetches together.

use crate::domain::currency::client::Currencies;
use crate::domain::watchlist::client::Coins;
use crate::domain::watchlist::Watchlist;
use crate::error::FetchError;
use crate::http::CoinwatchHttp;
use crate::prefs::{store_selected_currency, PreferenceStore};
use crate::selection::SelectionEvent;
use crate::shared::TickerSymbol;

// Re-export sub-client types for convenience.
pub use crate::domain::currency::client::Currencies as CurrenciesClient;
pub use crate::domain::watchlist::client::Coins as CoinsClient;

/// The primary entry point for the Coinwatch SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.currencies()`.
#[derive(Clone)]
pub struct CoinwatchClient {
    pub(crate) http: CoinwatchHttp,
}

impl CoinwatchClient {
    pub fn builder() -> CoinwatchClientBuilder {
        CoinwatchClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn currencies(&self) -> Currencies<'_> {
        Currencies { client: self }
    }

    // ── Selection glue ───────────────────────────────────────────────────

    /// Commit a picked display currency, in the order the selection flow
    /// requires: persist the preference, update the watchlist's selected
    /// currency, then re-fetch prices.
    ///
    /// A failed fetch still leaves the preference and the selected currency
    /// committed; the previous coin list stays intact until a later refresh
    /// succeeds.
    pub async fn select_currency<P: PreferenceStore>(
        &self,
        prefs: &mut P,
        watchlist: &mut Watchlist,
        currency: TickerSymbol,
    ) -> Result<(), FetchError> {
        store_selected_currency(prefs, &currency)?;
        watchlist.set_selected_currency(currency);
        self.coins().refresh(watchlist).await
    }

    /// Apply a resolved [`SelectionEvent`]: a selection commits via
    /// [`select_currency`](Self::select_currency); a cancellation changes
    /// nothing. Returns whether the watchlist was refreshed.
    pub async fn apply_selection<P: PreferenceStore>(
        &self,
        prefs: &mut P,
        watchlist: &mut Watchlist,
        event: SelectionEvent,
    ) -> Result<bool, FetchError> {
        match event {
            SelectionEvent::Selected(currency) => {
                self.select_currency(prefs, watchlist, currency).await?;
                Ok(true)
            }
            SelectionEvent::Cancelled => Ok(false),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinwatchClientBuilder {
    base_url: String,
}

impl Default for CoinwatchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl CoinwatchClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<CoinwatchClient, FetchError> {
        Ok(CoinwatchClient {
            http: CoinwatchHttp::new(&self.base_url)?,
        })
    }
}
