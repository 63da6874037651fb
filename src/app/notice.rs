use std::time::{Duration, Instant};

use crate::services::Notifier;

#[derive(Clone, Debug)]
pub struct Notice {
    message: String,
    expires_at: Instant,
}

impl Notice {
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Holds the newest notice until it expires or is dismissed.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notice: Option<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_at(&mut self, message: &str, duration: Duration, now: Instant) {
        self.notice = Some(Notice {
            message: message.to_string(),
            expires_at: now + duration,
        });
    }

    pub fn active(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.expires_at > now)
            .map(Notice::message)
    }

    pub fn expire(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.notice = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

impl Notifier for NoticeBoard {
    fn show(&mut self, message: &str, duration: Duration) {
        self.show_at(message, duration, Instant::now());
    }
}
