use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const DIALOG_TITLE: &str = "Insert stock information";
pub const TICKER_LABEL: &str = "Stock ticker";
pub const CONFIRM_LABEL: &str = "Get stock information";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DialogAction {
    Confirm(String),
    Cancel,
}

/// Ticker prompt, pre-filled with the editor selection.
///
/// Confirming moves the ticker out, so a dialog confirms at most once. The
/// owner drops the dialog on either action.
#[derive(Debug)]
pub struct TickerDialog {
    ticker: String,
    /// In chars.
    cursor: usize,
}

impl TickerDialog {
    pub fn open(initial: &str) -> Self {
        Self {
            ticker: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogAction> {
        match key.code {
            KeyCode::Enter => return Some(DialogAction::Confirm(std::mem::take(&mut self.ticker))),
            KeyCode::Esc => return Some(DialogAction::Cancel),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_offset(self.cursor);
                self.ticker.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.ticker.remove(at);
            }
            KeyCode::Delete if self.cursor < self.ticker.chars().count() => {
                let at = self.byte_offset(self.cursor);
                self.ticker.remove(at);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.ticker.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.ticker.chars().count(),
            _ => {}
        }
        None
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.ticker
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.ticker.len())
    }
}
