use chrono::{DateTime, Local, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use strum_macros::Display;

use crate::models::NormalizedQuote;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Magnitude {
    #[strum(serialize = "M")]
    Million,
    #[strum(serialize = "B")]
    Billion,
    #[strum(serialize = "T")]
    Trillion,
}

impl Magnitude {
    pub fn of(value: Decimal) -> Self {
        if value < dec!(1000000000) {
            Magnitude::Million
        } else if value < dec!(1000000000000) {
            Magnitude::Billion
        } else {
            Magnitude::Trillion
        }
    }

    pub fn divisor(&self) -> Decimal {
        match self {
            Magnitude::Million => dec!(1000000),
            Magnitude::Billion => dec!(1000000000),
            Magnitude::Trillion => dec!(1000000000000),
        }
    }

    pub fn decimals(&self) -> u32 {
        match self {
            Magnitude::Trillion => 1,
            _ => 3,
        }
    }
}

/// Rounds half away from zero and pads to exactly `dp` decimals.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Shortest form, so `301.0` prints as `301`.
pub fn format_price(value: Decimal) -> String {
    value.normalize().to_string()
}

pub fn format_long_number(value: Decimal) -> String {
    let magnitude = Magnitude::of(value);
    format!(
        "{}{}",
        format_fixed(value / magnitude.divisor(), magnitude.decimals()),
        magnitude
    )
}

/// en-US digit grouping.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_timestamp(updated: &DateTime<Utc>) -> String {
    updated
        .with_timezone(&Local)
        .format("%a %b %d %Y %H:%M:%S GMT%z")
        .to_string()
}

/// Percentage of the ask. `ask` must be non-zero.
pub fn spread_percent(bid: Decimal, ask: Decimal) -> Decimal {
    (ask - bid) / ask * dec!(100)
}

/// Renders the callout block for `ticker`, without trailing newlines.
pub fn render_callout(ticker: &str, quote: &NormalizedQuote) -> String {
    let mut output = format!("> [!info]- {} ", ticker);

    let bid_ask = quote.bid_ask();
    if let Some((bid, ask)) = bid_ask {
        output.push_str(&format!(
            "(Bid: {}, Ask: {}, Spread: {}%)",
            format_price(bid),
            format_price(ask),
            format_fixed(spread_percent(bid, ask), 3)
        ));
    } else if let Some(previous_close) = quote.previous_close() {
        output.push_str(&format!(
            "(Previous close: {})",
            format_price(*previous_close)
        ));
    }

    let mut push_line = |label: &str, value: String| {
        output.push_str(&format!("\n> **{}:** {}", label, value));
    };

    if let Some(name) = quote.name() {
        push_line("Name", name.clone());
    }
    if let Some(currency) = quote.currency() {
        push_line("Currency", currency.clone());
    }
    if let Some(volume) = quote.volume() {
        push_line("Volume", format_volume(*volume));
    }
    if let Some(market_cap) = quote.market_cap() {
        push_line("Market cap", format_long_number(*market_cap));
    }
    if let (Some(_), Some(previous_close)) = (bid_ask, quote.previous_close()) {
        push_line("Previous close", format_price(*previous_close));
    }
    if let Some((low, high)) = quote.day_range() {
        push_line(
            "Day range",
            format!("{} – {}", format_price(low), format_price(high)),
        );
    }
    if let Some((low, high)) = quote.fifty_two_week_range() {
        push_line(
            "52W range",
            format!("{} – {}", format_price(low), format_price(high)),
        );
    }

    if let Some(updated) = quote.last_updated() {
        output.push_str(&format!(
            "\n>\n><small>*{}*</small>",
            format_timestamp(updated)
        ));
    }

    output
}

/// Text that replaces the editor selection.
pub fn render_insertion(ticker: &str, quote: &NormalizedQuote) -> String {
    format!("{}\n\n", render_callout(ticker, quote))
}
