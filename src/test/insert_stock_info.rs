#[cfg(test)]
mod tests {
    use crate::{
        models::QuoteRequest,
        services::{NOTICE_DURATION, NOTICE_MESSAGE, StockInfoService},
        test::support::fixtures::{
            FakeProvider, MSFT_PAYLOAD, RecordingEditor, RecordingNotifier, capture_logs, errors,
            payload, take_logs,
        },
    };

    #[tokio::test]
    async fn success_replaces_selection_once() {
        let service = StockInfoService::new(FakeProvider::payload(payload(MSFT_PAYLOAD)));
        let mut editor = RecordingEditor {
            selection: String::from("MSFT"),
            ..Default::default()
        };
        let mut notifier = RecordingNotifier::default();

        let inserted = service
            .insert_stock_info(&QuoteRequest::from("MSFT"), &mut editor, &mut notifier)
            .await;

        assert!(inserted);
        assert!(notifier.shown.is_empty());
        assert_eq!(editor.replacements.len(), 1);

        let text = &editor.replacements[0];
        assert!(text.starts_with("> [!info]- MSFT (Bid: 300.5, Ask: 301, Spread: 0.166%)"));
        assert!(text.contains("\n> **Volume:** 15,000,000"));
        assert!(text.contains("\n> **Market cap:** 2.3T"));
        assert!(text.contains("\n> **Day range:** 298 – 302"));
        assert!(text.contains("\n> **52W range:** 250 – 350"));
        assert!(text.contains("\n>\n><small>*"));
        assert!(text.ends_with("*</small>\n\n"));
    }

    #[tokio::test]
    async fn fault_leaves_document_untouched() {
        capture_logs();
        let service = StockInfoService::new(FakeProvider::fault("network unreachable"));
        let mut editor = RecordingEditor::default();
        let mut notifier = RecordingNotifier::default();

        let inserted = service
            .insert_stock_info(&QuoteRequest::from("MSFT"), &mut editor, &mut notifier)
            .await;

        assert!(!inserted);
        assert!(editor.replacements.is_empty());
        assert_eq!(
            notifier.shown,
            vec![(NOTICE_MESSAGE.to_string(), NOTICE_DURATION)]
        );
        assert_eq!(errors(&take_logs()).len(), 1);
    }

    #[tokio::test]
    async fn provider_error_notifies_and_logs_message() {
        capture_logs();
        let service = StockInfoService::new(FakeProvider::payload(payload(
            r#"{"error": true, "message": "Quote not found for symbol: ZZZZ"}"#,
        )));
        let mut editor = RecordingEditor::default();
        let mut notifier = RecordingNotifier::default();

        let inserted = service
            .insert_stock_info(&QuoteRequest::from("ZZZZ"), &mut editor, &mut notifier)
            .await;

        assert!(!inserted);
        assert!(editor.replacements.is_empty());
        assert_eq!(notifier.shown.len(), 1);
        let logs = take_logs();
        let errors = errors(&logs);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Quote not found for symbol: ZZZZ"));
    }

    #[tokio::test]
    async fn invocations_are_independent() {
        let service = StockInfoService::new(FakeProvider::payload(payload(MSFT_PAYLOAD)));
        let mut editor = RecordingEditor::default();
        let mut notifier = RecordingNotifier::default();

        service
            .insert_stock_info(&QuoteRequest::from("MSFT"), &mut editor, &mut notifier)
            .await;
        service
            .insert_stock_info(&QuoteRequest::from("MSFT"), &mut editor, &mut notifier)
            .await;

        assert_eq!(service.provider().calls(), 2);
        assert_eq!(editor.replacements[0], editor.replacements[1]);
    }
}
