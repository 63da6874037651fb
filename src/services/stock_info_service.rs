use std::time::Duration;

use log::{error, info};

use crate::{
    api::QuoteProvider,
    models::{QuoteRequest, QuoteResult},
    services::{Editor, Notifier, formatter::render_insertion},
};

pub const NOTICE_MESSAGE: &str = "Error: couldn't retrieve stock information";
pub const NOTICE_DURATION: Duration = Duration::from_millis(15_000);

/// Runs the "Insert stock info" command against a quote provider.
///
/// One provider call per invocation; no retries and nothing kept between
/// invocations.
pub struct StockInfoService<P: QuoteProvider> {
    provider: P,
}

impl<P: QuoteProvider> StockInfoService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn fetch_quote(&self, request: &QuoteRequest) -> QuoteResult {
        if request.is_empty() {
            return QuoteResult::ProviderError(String::from("No ticker symbol given"));
        }

        match self.provider.fetch_symbol(request.symbol()).await {
            Ok(payload) if *payload.error() => QuoteResult::ProviderError(payload.provider_message()),
            Ok(payload) => QuoteResult::Success(payload),
            Err(e) => {
                error!(
                    "{} did not respond for {}: {:#}",
                    self.provider.id(),
                    request.symbol(),
                    e
                );
                QuoteResult::NoResponse
            }
        }
    }

    /// Fetches the quote for `request` and replaces the editor selection with
    /// the rendered callout. Returns whether the document was changed.
    pub async fn insert_stock_info<E, N>(
        &self,
        request: &QuoteRequest,
        editor: &mut E,
        notifier: &mut N,
    ) -> bool
    where
        E: Editor + ?Sized,
        N: Notifier + ?Sized,
    {
        info!("Insert stock info: '{}'", request.symbol());

        match self.fetch_quote(request).await {
            QuoteResult::Success(payload) => {
                let quote = payload.to_normalized_quote();
                editor.replace_selection(&render_insertion(request.symbol(), &quote));
                info!("Inserted stock info for {}", request.symbol());
                true
            }
            QuoteResult::ProviderError(message) => {
                error!("Error occurred: {}", message);
                notifier.show(NOTICE_MESSAGE, NOTICE_DURATION);
                false
            }
            QuoteResult::NoResponse => {
                notifier.show(NOTICE_MESSAGE, NOTICE_DURATION);
                false
            }
        }
    }
}
