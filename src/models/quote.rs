use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Quote fields extracted from a successful provider payload.
///
/// Every field is optional. A provider value of zero or an empty string is
/// stored as `None`, the same as a missing key.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct NormalizedQuote {
    name: Option<String>,
    currency: Option<String>,
    bid: Option<Decimal>,
    ask: Option<Decimal>,
    market_cap: Option<Decimal>,
    previous_close: Option<Decimal>,
    volume: Option<u64>,
    fifty_two_week_high: Option<Decimal>,
    fifty_two_week_low: Option<Decimal>,
    day_high: Option<Decimal>,
    day_low: Option<Decimal>,
    last_updated: Option<DateTime<Utc>>,
}

impl NormalizedQuote {
    /// Bid and ask, only when both are known.
    pub fn bid_ask(&self) -> Option<(Decimal, Decimal)> {
        self.bid.zip(self.ask)
    }

    pub fn day_range(&self) -> Option<(Decimal, Decimal)> {
        self.day_low.zip(self.day_high)
    }

    pub fn fifty_two_week_range(&self) -> Option<(Decimal, Decimal)> {
        self.fifty_two_week_low.zip(self.fifty_two_week_high)
    }
}

pub fn present_text(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn present_decimal(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}
