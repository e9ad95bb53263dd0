//! Coins sub-client — coin price fetches and watchlist refresh.

use crate::client::CoinwatchClient;
use crate::domain::watchlist::wire::CoinPricesResponse;
use crate::domain::watchlist::{Coin, Watchlist};
use crate::error::FetchError;
use crate::shared::TickerSymbol;

/// Sub-client for coin price operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinwatchClient,
}

impl<'a> Coins<'a> {
    /// Fetch coin prices denominated in `currency`.
    pub async fn fetch(&self, currency: &TickerSymbol) -> Result<Vec<Coin>, FetchError> {
        let resp = self.quote(currency).await?;
        Ok(resp.coins.into_iter().map(Coin::from).collect())
    }

    /// Fetch prices in the watchlist's selected currency and replace its
    /// contents.
    ///
    /// On success the list is replaced wholesale; the exclusive borrow
    /// guarantees no observer sees a partial list. On failure the previous
    /// list is left untouched (stale-but-consistent) and the error is
    /// returned. When refreshes of clones of the same client overlap, the
    /// last one to complete wins.
    pub async fn refresh(&self, watchlist: &mut Watchlist) -> Result<(), FetchError> {
        match self.quote(watchlist.selected_currency()).await {
            Ok(resp) => {
                let coins = resp.coins.into_iter().map(Coin::from).collect();
                watchlist.replace(coins, resp.as_of);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "coin price fetch failed; keeping previous list");
                Err(e)
            }
        }
    }

    async fn quote(&self, currency: &TickerSymbol) -> Result<CoinPricesResponse, FetchError> {
        Ok(self.client.http.get_coin_prices(currency).await?)
    }
}
