use chrono::{TimeZone, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;

use crate::models::{
    NormalizedQuote,
    quote::{present_decimal, present_text},
};

/// Payload every provider answers with.
#[derive(Clone, Debug, Default, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct SymbolResponseDto {
    #[serde(default)]
    error: bool,
    message: Option<String>,
    name: Option<String>,
    currency: Option<String>,
    response: Option<SymbolQuoteDto>,
}

#[derive(Clone, Debug, Default, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct SymbolQuoteDto {
    bid: Option<BidAskDto>,
    ask: Option<BidAskDto>,
    market_cap: Option<Decimal>,
    previous_close: Option<Decimal>,
    volume: Option<Decimal>,
    day_range: Option<RangeDto>,
    fifty_two_week_range: Option<RangeDto>,
    /// Epoch milliseconds.
    updated: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Getters, new)]
pub struct BidAskDto {
    value: Option<Decimal>,
    shares: Option<Decimal>,
}

#[derive(Clone, Debug, Default, Deserialize, Getters, new)]
pub struct RangeDto {
    low: Option<Decimal>,
    high: Option<Decimal>,
}

impl SymbolResponseDto {
    pub fn provider_message(&self) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| String::from("Provider returned an error without a message"))
    }

    pub fn to_normalized_quote(&self) -> NormalizedQuote {
        let quote = self.response.as_ref();
        let day_range = quote.and_then(|q| q.day_range.as_ref());
        let year_range = quote.and_then(|q| q.fifty_two_week_range.as_ref());

        NormalizedQuote::new(
            present_text(self.name.as_deref()),
            present_text(self.currency.as_deref()),
            present_decimal(quote.and_then(|q| q.bid.as_ref()).and_then(|b| b.value)),
            present_decimal(quote.and_then(|q| q.ask.as_ref()).and_then(|a| a.value)),
            present_decimal(quote.and_then(|q| q.market_cap)),
            present_decimal(quote.and_then(|q| q.previous_close)),
            present_decimal(quote.and_then(|q| q.volume))
                .and_then(|v| v.round().to_u64())
                .filter(|v| *v != 0),
            present_decimal(year_range.and_then(|r| r.high)),
            present_decimal(year_range.and_then(|r| r.low)),
            present_decimal(day_range.and_then(|r| r.high)),
            present_decimal(day_range.and_then(|r| r.low)),
            quote
                .and_then(|q| q.updated)
                .filter(|ms| *ms != 0)
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        )
    }
}
