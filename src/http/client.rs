//! Low-level HTTP client — `CoinwatchHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level client wraps this.
//!
//! Every fetch runs exactly once: no retry, no backoff. A failure surfaces
//! immediately and the caller's state is left for the caller to keep.

use crate::domain::currency::wire::CurrenciesResponse;
use crate::domain::watchlist::wire::CoinPricesResponse;
use crate::error::HttpError;
use crate::shared::TickerSymbol;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Coinwatch REST API.
#[derive(Clone)]
pub struct CoinwatchHttp {
    base_url: String,
    client: Client,
}

impl CoinwatchHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_coin_prices(
        &self,
        currency: &TickerSymbol,
    ) -> Result<CoinPricesResponse, HttpError> {
        let url = format!(
            "{}/api/coins?currency={}",
            self.base_url,
            urlencoding::encode(currency.as_str())
        );
        self.get(&url).await
    }

    // ── Currencies ───────────────────────────────────────────────────────

    pub async fn get_currencies(&self) -> Result<CurrenciesResponse, HttpError> {
        let url = format!("{}/api/currencies", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
