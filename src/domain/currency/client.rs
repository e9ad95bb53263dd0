//! Currencies sub-client — currency catalog fetches.

use crate::client::CoinwatchClient;
use crate::domain::currency::{Currency, CurrencyCatalog};
use crate::error::FetchError;

/// Sub-client for currency catalog operations.
pub struct Currencies<'a> {
    pub(crate) client: &'a CoinwatchClient,
}

impl<'a> Currencies<'a> {
    /// Fetch the full currency catalog.
    pub async fn list(&self) -> Result<Vec<Currency>, FetchError> {
        let resp = self.client.http.get_currencies().await?;
        Ok(resp.currencies.into_iter().map(Currency::from).collect())
    }

    /// Fetch the catalog and replace `catalog`'s contents.
    ///
    /// Same contract as the watchlist refresh: replaced wholesale on
    /// success, left untouched on failure.
    pub async fn refresh(&self, catalog: &mut CurrencyCatalog) -> Result<(), FetchError> {
        match self.list().await {
            Ok(currencies) => {
                catalog.replace(currencies);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "currency fetch failed; keeping previous catalog");
                Err(e)
            }
        }
    }
}
