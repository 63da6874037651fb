pub mod formatter;
pub mod host;
pub mod stock_info_service;

pub use host::{Editor, Notifier};
pub use stock_info_service::{NOTICE_DURATION, NOTICE_MESSAGE, StockInfoService};
