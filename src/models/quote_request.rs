use derive_getters::Getters;
use derive_new::new;

/// Ticker symbol entered by the user. Forwarded to the provider as typed.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct QuoteRequest {
    symbol: String,
}

impl QuoteRequest {
    pub fn is_empty(&self) -> bool {
        self.symbol.trim().is_empty()
    }
}

impl From<&str> for QuoteRequest {
    fn from(symbol: &str) -> Self {
        Self::new(symbol.to_string())
    }
}
