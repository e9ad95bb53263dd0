//! Conversion: CoinResponse → Coin.

use super::wire::CoinResponse;
use super::Coin;

impl From<CoinResponse> for Coin {
    fn from(source: CoinResponse) -> Self {
        Coin {
            symbol: source.symbol,
            name: source.name,
            price: source.price,
            change_24h: source.change_24h,
        }
    }
}
