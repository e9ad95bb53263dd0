//! Integration tests for the selection flow: browsing → picking → browsing,
//! with the preference store and watchlist wired through the high-level
//! client.
//!
//! No network is required: the fetch-failure paths use an unroutable
//! localhost port, which is exactly the stale-but-consistent case the
//! watchlist must survive.

use coinwatch_sdk::prelude::*;

/// Nothing listens here; connections are refused immediately.
const UNROUTABLE_URL: &str = "http://127.0.0.1:1";

fn offline_client() -> CoinwatchClient {
    CoinwatchClient::builder()
        .base_url(UNROUTABLE_URL)
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn select_commits_preference_even_when_fetch_fails() {
    let client = offline_client();
    let mut prefs = MemoryPrefs::new();

    // First launch: no preference persisted, default resolves to USD.
    let selected = load_selected_currency(&prefs).unwrap();
    assert_eq!(selected.as_str(), "USD");
    let mut watchlist = Watchlist::new(selected);

    // Browsing → PickingCurrency → Browsing with a selection.
    let mut flow = SelectionFlow::new();
    let session = flow.open_picker().unwrap();
    assert_eq!(flow.state(), SelectionState::PickingCurrency);
    session.select(TickerSymbol::from("EUR"));
    let event = flow.resolved().await.unwrap();
    assert_eq!(flow.state(), SelectionState::Browsing);

    // The fetch cannot reach a server, but the preference and the selected
    // currency are already committed; the coin list stays untouched.
    let result = client
        .apply_selection(&mut prefs, &mut watchlist, event)
        .await;
    assert!(matches!(result, Err(FetchError::Http(_))));

    assert_eq!(watchlist.selected_currency().as_str(), "EUR");
    assert!(watchlist.is_empty());

    // A fresh load reads back the committed selection.
    let reloaded = load_selected_currency(&prefs).unwrap();
    assert_eq!(reloaded.as_str(), "EUR");
}

#[tokio::test]
async fn cancel_changes_nothing() {
    let client = offline_client();
    let mut prefs = MemoryPrefs::new();
    let mut watchlist = Watchlist::new(load_selected_currency(&prefs).unwrap());

    let mut flow = SelectionFlow::new();
    let session = flow.open_picker().unwrap();
    session.cancel();
    let event = flow.resolved().await.unwrap();

    let refreshed = client
        .apply_selection(&mut prefs, &mut watchlist, event)
        .await
        .unwrap();
    assert!(!refreshed);

    assert_eq!(watchlist.selected_currency().as_str(), "USD");
    assert_eq!(load_selected_currency(&prefs).unwrap().as_str(), "USD");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_catalog() {
    let client = offline_client();

    let mut catalog = CurrencyCatalog::new();
    catalog.replace(vec![
        Currency {
            symbol: TickerSymbol::from("USD"),
            name: "United States Dollar".to_string(),
        },
        Currency {
            symbol: TickerSymbol::from("EUR"),
            name: "Euro".to_string(),
        },
    ]);

    let result = client.currencies().refresh(&mut catalog).await;
    assert!(result.is_err());

    // Last-known-good list survives the failure.
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.all()[0].symbol.as_str(), "USD");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_watchlist() {
    let client = offline_client();

    let mut watchlist = Watchlist::new(TickerSymbol::from("USD"));
    watchlist.replace(
        vec![Coin {
            symbol: TickerSymbol::from("BTC"),
            name: "Bitcoin".to_string(),
            price: rust_decimal::Decimal::from(65000),
            change_24h: None,
        }],
        None,
    );

    let result = client.coins().refresh(&mut watchlist).await;
    assert!(result.is_err());

    assert_eq!(watchlist.len(), 1);
    assert_eq!(watchlist.coin(0).symbol.as_str(), "BTC");
}
