use std::time::Duration;

/// Text surface the command reads from and writes into.
pub trait Editor {
    fn selection(&self) -> String;

    fn replace_selection(&mut self, text: &str);
}

/// Transient user-visible messages. Fire-and-forget.
pub trait Notifier {
    fn show(&mut self, message: &str, duration: Duration);
}
