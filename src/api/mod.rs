pub mod dto;
pub mod provider;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use dto::{BidAskDto, RangeDto, SymbolQuoteDto, SymbolResponseDto};
pub use provider::QuoteProvider;
pub use yahoo::YahooApi;
