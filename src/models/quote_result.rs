use crate::api::SymbolResponseDto;

/// Outcome of a single provider call.
#[derive(Debug)]
pub enum QuoteResult {
    Success(SymbolResponseDto),
    ProviderError(String),
    NoResponse,
}

impl QuoteResult {
    pub fn is_success(&self) -> bool {
        matches!(self, QuoteResult::Success(_))
    }
}
