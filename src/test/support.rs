#[cfg(test)]
pub mod fixtures {
    use std::{
        sync::{
            Mutex, Once,
            atomic::{AtomicUsize, Ordering},
        },
        thread::{self, ThreadId},
        time::Duration,
    };

    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::{
        api::{QuoteProvider, SymbolResponseDto},
        services::{Editor, Notifier},
    };

    pub const MSFT_PAYLOAD: &str = r#"{
        "error": false,
        "name": "Microsoft Corporation",
        "currency": "USD",
        "response": {
            "bid": { "value": 300.5, "shares": 100 },
            "ask": { "value": 301.0, "shares": 200 },
            "marketCap": 2300000000000,
            "previousClose": 299.8,
            "volume": 15000000,
            "dayRange": { "low": 298, "high": 302 },
            "fiftyTwoWeekRange": { "low": 250, "high": 350 },
            "updated": 1760000000000
        }
    }"#;

    pub fn payload(json: &str) -> SymbolResponseDto {
        serde_json::from_str(json).unwrap()
    }

    pub enum FakeResponse {
        Payload(SymbolResponseDto),
        Fault(String),
    }

    pub struct FakeProvider {
        response: FakeResponse,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        pub fn payload(payload: SymbolResponseDto) -> Self {
            Self {
                response: FakeResponse::Payload(payload),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn fault(message: &str) -> Self {
            Self {
                response: FakeResponse::Fault(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteProvider for FakeProvider {
        fn id(&self) -> &'static str {
            "FAKE"
        }

        async fn fetch_symbol(&self, _symbol: &str) -> Result<SymbolResponseDto> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                FakeResponse::Payload(payload) => Ok(payload.clone()),
                FakeResponse::Fault(message) => Err(anyhow!(message.clone())),
            }
        }
    }

    #[derive(Default)]
    pub struct RecordingEditor {
        pub selection: String,
        pub replacements: Vec<String>,
    }

    impl Editor for RecordingEditor {
        fn selection(&self) -> String {
            self.selection.clone()
        }

        fn replace_selection(&mut self, text: &str) {
            self.replacements.push(text.to_string());
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub shown: Vec<(String, Duration)>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&mut self, message: &str, duration: Duration) {
            self.shown.push((message.to_string(), duration));
        }
    }

    struct CaptureLogger;

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();
    static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.lock().unwrap().push((
                thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    /// Captures log records per test thread.
    pub fn capture_logs() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        take_logs();
    }

    /// Drains the records logged by the current thread.
    pub fn take_logs() -> Vec<(Level, String)> {
        let id = thread::current().id();
        let mut records = RECORDS.lock().unwrap();
        let (mine, others): (Vec<_>, Vec<_>) =
            records.drain(..).partition(|(thread, _, _)| *thread == id);
        *records = others;
        mine.into_iter()
            .map(|(_, level, message)| (level, message))
            .collect()
    }

    pub fn errors(logs: &[(Level, String)]) -> Vec<&str> {
        logs.iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}
