//! Integration tests for the HTTP client against the live API.
//!
//! All tests are `#[ignore]` because they require network access.
//!
//! Run with:
//! ```bash
//! cargo test -p coinwatch-sdk --test http_integration -- --ignored
//! ```

use coinwatch_sdk::prelude::*;

fn live_client() -> CoinwatchClient {
    CoinwatchClient::builder()
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn fetch_coins_in_usd() {
    let client = live_client();
    let coins = client
        .coins()
        .fetch(&TickerSymbol::from("USD"))
        .await
        .expect("coin fetch should succeed");
    assert!(!coins.is_empty());
}

#[tokio::test]
#[ignore]
async fn fetch_currency_catalog() {
    let client = live_client();
    let currencies = client
        .currencies()
        .list()
        .await
        .expect("currency fetch should succeed");
    assert!(currencies.iter().any(|c| c.symbol.as_str() == "USD"));
}

#[tokio::test]
#[ignore]
async fn refresh_replaces_watchlist() {
    let client = live_client();
    let mut watchlist = Watchlist::new(TickerSymbol::from("USD"));

    client
        .coins()
        .refresh(&mut watchlist)
        .await
        .expect("refresh should succeed");

    assert!(!watchlist.is_empty());
    // Every position is addressable within [0, len).
    for i in 0..watchlist.len() {
        let _ = watchlist.coin(i);
    }
}
