#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        models::{QuoteRequest, QuoteResult},
        services::StockInfoService,
        test::support::fixtures::{
            FakeProvider, MSFT_PAYLOAD, capture_logs, errors, payload, take_logs,
        },
    };

    #[tokio::test]
    async fn well_formed_payload_is_success() {
        let service = StockInfoService::new(FakeProvider::payload(payload(MSFT_PAYLOAD)));

        let result = service.fetch_quote(&QuoteRequest::from("MSFT")).await;

        match result {
            QuoteResult::Success(payload) => {
                let quote = payload.to_normalized_quote();
                assert_eq!(quote.bid(), &Some(dec!(300.5)));
                assert_eq!(quote.ask(), &Some(dec!(301)));
                assert_eq!(quote.volume(), &Some(15000000));
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(service.provider().calls(), 1);
    }

    #[tokio::test]
    async fn error_flag_is_provider_error() {
        let service = StockInfoService::new(FakeProvider::payload(payload(
            r#"{"error": true, "message": "Symbol not found"}"#,
        )));

        let result = service.fetch_quote(&QuoteRequest::from("NOPE")).await;

        match result {
            QuoteResult::ProviderError(message) => assert_eq!(message, "Symbol not found"),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn error_flag_without_message_still_carries_one() {
        let service = StockInfoService::new(FakeProvider::payload(payload(r#"{"error": true}"#)));

        let result = service.fetch_quote(&QuoteRequest::from("NOPE")).await;

        assert!(matches!(result, QuoteResult::ProviderError(message) if !message.is_empty()));
    }

    #[tokio::test]
    async fn fault_is_no_response_and_logged_once() {
        capture_logs();
        let service = StockInfoService::new(FakeProvider::fault("connection reset"));

        let result = service.fetch_quote(&QuoteRequest::from("MSFT")).await;

        assert!(matches!(result, QuoteResult::NoResponse));
        let logs = take_logs();
        let errors = errors(&logs);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("connection reset"));
    }

    #[tokio::test]
    async fn blank_ticker_skips_the_provider() {
        let service = StockInfoService::new(FakeProvider::payload(payload(MSFT_PAYLOAD)));

        let result = service.fetch_quote(&QuoteRequest::from("  ")).await;

        assert!(matches!(result, QuoteResult::ProviderError(_)));
        assert_eq!(service.provider().calls(), 0);
    }

    #[test]
    fn zero_and_empty_values_are_absent() {
        let quote = payload(
            r#"{
                "name": "",
                "currency": "EUR",
                "response": {
                    "bid": { "value": 0 },
                    "ask": { "value": 12.5 },
                    "marketCap": 0,
                    "previousClose": null,
                    "volume": 0,
                    "updated": 0
                }
            }"#,
        )
        .to_normalized_quote();

        assert_eq!(quote.name(), &None);
        assert_eq!(quote.currency(), &Some(String::from("EUR")));
        assert_eq!(quote.bid(), &None);
        assert_eq!(quote.ask(), &Some(dec!(12.5)));
        assert_eq!(quote.market_cap(), &None);
        assert_eq!(quote.previous_close(), &None);
        assert_eq!(quote.volume(), &None);
        assert_eq!(quote.last_updated(), &None);
        assert_eq!(quote.bid_ask(), None);
    }

    #[test]
    fn success_without_response_has_no_quote_fields() {
        let quote = payload(r#"{"error": false, "name": "Acme"}"#).to_normalized_quote();

        assert_eq!(quote.name(), &Some(String::from("Acme")));
        assert_eq!(quote.bid_ask(), None);
        assert_eq!(quote.day_range(), None);
        assert_eq!(quote.last_updated(), &None);
    }
}
