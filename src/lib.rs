//! # Coinwatch SDK
//!
//! A Rust SDK for a cryptocurrency watchlist backend: coin prices in a chosen
//! display currency, the currency catalog, and the persisted display-currency
//! preference.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, app-owned state containers
//! 2. **Preferences** — The key-value boundary holding the selected display currency
//! 3. **Selection** — The browse → pick-currency → browse flow with single-shot picker sessions
//! 4. **HTTP API** — `CoinwatchHttp`, one method per endpoint, no retries
//! 5. **High-Level Client** — `CoinwatchClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinwatch_sdk::prelude::*;
//!
//! let client = CoinwatchClient::builder()
//!     .base_url("https://api.coinwatch.xyz")
//!     .build()?;
//!
//! let prefs = MemoryPrefs::new();
//! let mut watchlist = Watchlist::new(load_selected_currency(&prefs)?);
//! client.coins().refresh(&mut watchlist).await?;
//!
//! let mut catalog = CurrencyCatalog::new();
//! client.currencies().refresh(&mut catalog).await?;
//! let hits = catalog.filtered("usd");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Preferences ─────────────────────────────────────────────────────

/// Persisted preferences: the selected display currency.
pub mod prefs;

// ── Layer 3: Selection ───────────────────────────────────────────────────────

/// Currency selection flow: browsing ⇄ picking, single-shot picker sessions.
pub mod selection;

// ── Layer 4: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `CoinwatchClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::TickerSymbol;

    // Domain types — watchlist
    pub use crate::domain::watchlist::{Coin, Watchlist};

    // Domain types — currency
    pub use crate::domain::currency::{Currency, CurrencyCatalog};

    // Errors
    pub use crate::error::{FetchError, HttpError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Preferences
    pub use crate::prefs::{
        load_selected_currency, store_selected_currency, JsonFilePrefs, MemoryPrefs,
        PreferenceStore, PrefsError, DEFAULT_CURRENCY, SELECTED_CURRENCY_KEY,
    };

    // Selection flow
    pub use crate::selection::{
        PickerSession, SelectionError, SelectionEvent, SelectionFlow, SelectionState,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinsClient, CoinwatchClient, CoinwatchClientBuilder, CurrenciesClient,
    };
}
