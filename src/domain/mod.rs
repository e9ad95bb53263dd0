//! Domain modules — vertical slices, one per area of the API.

pub mod currency;
pub mod watchlist;
