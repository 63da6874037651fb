use anyhow::Result;
use async_trait::async_trait;

use super::SymbolResponseDto;

/// A source of live quotes.
///
/// `Err` means the provider could not be reached or answered with something
/// unreadable. A provider that answered but rejected the symbol returns
/// `Ok` with the payload's `error` flag set.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn id(&self) -> &'static str;

    async fn fetch_symbol(&self, symbol: &str) -> Result<SymbolResponseDto>;
}
