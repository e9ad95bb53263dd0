//! HTTP layer: the low-level REST client.

pub mod client;

pub use client::CoinwatchHttp;
