//! Currency catalog state container — app-owned, SDK-provided filter logic.

use super::Currency;

/// The full catalog of display currencies, with substring filtering for a
/// search box.
///
/// The app owns instances of this type. Populated wholesale by
/// [`Currencies::refresh`](crate::domain::currency::client::Currencies::refresh);
/// a failed fetch leaves the previous catalog intact.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog (e.g. from a REST fetch).
    pub fn replace(&mut self, currencies: Vec<Currency>) {
        self.currencies = currencies;
    }

    /// The full unfiltered catalog.
    pub fn all(&self) -> &[Currency] {
        &self.currencies
    }

    /// Currencies whose ticker symbol contains `query`, case-insensitively,
    /// anywhere in the symbol. Original relative order is preserved.
    ///
    /// A query that is empty after trimming is a no-op: the full catalog is
    /// returned, not an empty result. Anything else is matched verbatim —
    /// surrounding whitespace is part of the needle.
    pub fn filtered(&self, query: &str) -> Vec<Currency> {
        if query.trim().is_empty() {
            return self.currencies.clone();
        }
        let needle = query.to_lowercase();
        self.currencies
            .iter()
            .filter(|c| c.symbol.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
