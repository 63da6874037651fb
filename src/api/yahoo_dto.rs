use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{BidAskDto, RangeDto, SymbolQuoteDto, SymbolResponseDto};

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryDto {
    quote_summary: YahooQuoteSummary,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooQuoteSummary {
    result: Option<Vec<YahooQuoteSummaryResult>>,
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooErrorDto {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    price: Option<YahooPriceDto>,
    summary_detail: Option<YahooSummaryDetailDto>,
}

/// Yahoo wraps numbers as `{"raw": 1.5, "fmt": "1.50"}`, or `{}` when unknown.
#[derive(Clone, Debug, Default, Deserialize, Getters)]
pub struct YahooRawDto {
    raw: Option<Decimal>,
}

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceDto {
    currency: Option<String>,
    short_name: Option<String>,
    long_name: Option<String>,
    market_cap: Option<YahooRawDto>,
    regular_market_volume: Option<YahooRawDto>,
    /// Epoch seconds.
    regular_market_time: Option<i64>,
}

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetailDto {
    currency: Option<String>,
    bid: Option<YahooRawDto>,
    ask: Option<YahooRawDto>,
    bid_size: Option<YahooRawDto>,
    ask_size: Option<YahooRawDto>,
    market_cap: Option<YahooRawDto>,
    previous_close: Option<YahooRawDto>,
    volume: Option<YahooRawDto>,
    day_low: Option<YahooRawDto>,
    day_high: Option<YahooRawDto>,
    fifty_two_week_low: Option<YahooRawDto>,
    fifty_two_week_high: Option<YahooRawDto>,
}

fn raw(value: &Option<YahooRawDto>) -> Option<Decimal> {
    value.as_ref().and_then(|v| v.raw)
}

impl YahooQuoteSummaryDto {
    pub fn to_symbol_response(&self, symbol: &str) -> SymbolResponseDto {
        if let Some(error) = &self.quote_summary.error {
            let message = error
                .description
                .clone()
                .or_else(|| error.code.clone())
                .unwrap_or_else(|| format!("Yahoo returned an error for {}", symbol));
            return SymbolResponseDto::new(true, Some(message), None, None, None);
        }

        let Some(result) = self
            .quote_summary
            .result
            .as_ref()
            .and_then(|results| results.first())
        else {
            return SymbolResponseDto::new(
                true,
                Some(format!("No quote found for symbol {}", symbol)),
                None,
                None,
                None,
            );
        };

        let price = result.price.as_ref();
        let detail = result.summary_detail.as_ref();

        let name = price.and_then(|p| {
            p.long_name
                .clone()
                .filter(|n| !n.is_empty())
                .or_else(|| p.short_name.clone())
        });
        let currency = price
            .and_then(|p| p.currency.clone())
            .or_else(|| detail.and_then(|d| d.currency.clone()));

        let quote = SymbolQuoteDto::new(
            detail.map(|d| BidAskDto::new(raw(&d.bid), raw(&d.bid_size))),
            detail.map(|d| BidAskDto::new(raw(&d.ask), raw(&d.ask_size))),
            detail
                .and_then(|d| raw(&d.market_cap))
                .or_else(|| price.and_then(|p| raw(&p.market_cap))),
            detail.and_then(|d| raw(&d.previous_close)),
            detail
                .and_then(|d| raw(&d.volume))
                .or_else(|| price.and_then(|p| raw(&p.regular_market_volume))),
            detail.map(|d| RangeDto::new(raw(&d.day_low), raw(&d.day_high))),
            detail.map(|d| RangeDto::new(raw(&d.fifty_two_week_low), raw(&d.fifty_two_week_high))),
            price
                .and_then(|p| p.regular_market_time)
                .map(|secs| secs * 1000),
        );

        SymbolResponseDto::new(false, None, name, currency, Some(quote))
    }
}
