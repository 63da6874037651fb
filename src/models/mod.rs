pub mod quote;
pub mod quote_request;
pub mod quote_result;

pub use quote::NormalizedQuote;
pub use quote_request::QuoteRequest;
pub use quote_result::QuoteResult;
