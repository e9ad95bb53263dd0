//! Network URL constants for the Coinwatch SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coinwatch.xyz";
