//! Conversion: CurrencyResponse → Currency.

use super::wire::CurrencyResponse;
use super::Currency;

impl From<CurrencyResponse> for Currency {
    fn from(source: CurrencyResponse) -> Self {
        Currency {
            symbol: source.symbol,
            name: source.name,
        }
    }
}
