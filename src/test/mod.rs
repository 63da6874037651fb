mod insert_stock_info;
mod quote_fetch;
mod support;
