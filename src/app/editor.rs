use std::{fs, io::ErrorKind, ops::Range, path::Path};

use crate::{error::StockInfoError, services::Editor};

/// In-memory Markdown note with a cursor and an optional selection anchor.
///
/// Offsets are byte indices that always sit on char boundaries.
#[derive(Clone, Debug, Default)]
pub struct NoteBuffer {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
    dirty: bool,
}

impl NoteBuffer {
    pub fn new(text: String) -> Self {
        Self {
            text,
            cursor: 0,
            anchor: None,
            dirty: false,
        }
    }

    /// A missing file opens as an empty note.
    pub fn load(path: &Path) -> Result<Self, StockInfoError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::new(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(StockInfoError::ReadNote {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn save(&mut self, path: &Path) -> Result<(), StockInfoError> {
        fs::write(path, &self.text).map_err(|source| StockInfoError::WriteNote {
            path: path.to_path_buf(),
            source,
        })?;
        self.dirty = false;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn selection_range(&self) -> Option<Range<usize>> {
        match self.anchor {
            Some(anchor) if anchor != self.cursor => {
                Some(anchor.min(self.cursor)..anchor.max(self.cursor))
            }
            _ => None,
        }
    }

    /// Selects `range`, leaving the cursor at its end.
    pub fn select(&mut self, range: Range<usize>) {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        self.anchor = Some(start);
        self.cursor = end;
    }

    pub fn select_all(&mut self) {
        self.select(0..self.text.len());
    }

    /// (row, column) of the cursor, in lines and chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let col = before[self.line_start(self.cursor)..].chars().count();
        (row, col)
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Replaces the selection, if any, then inserts at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        let at = match self.selection_range() {
            Some(range) => {
                let start = range.start;
                self.text.replace_range(range, "");
                start
            }
            None => self.cursor,
        };
        self.text.insert_str(at, s);
        self.cursor = at + s.len();
        self.anchor = None;
        self.dirty = true;
    }

    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if let Some(prev) = self.prev_boundary(self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
            self.dirty = true;
        }
    }

    pub fn delete(&mut self) {
        if self.delete_selection() {
            return;
        }
        if let Some(next) = self.next_boundary(self.cursor) {
            self.text.replace_range(self.cursor..next, "");
            self.dirty = true;
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        self.start_motion(extend);
        if let Some(prev) = self.prev_boundary(self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self, extend: bool) {
        self.start_motion(extend);
        if let Some(next) = self.next_boundary(self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self, extend: bool) {
        self.start_motion(extend);
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_end(&mut self, extend: bool) {
        self.start_motion(extend);
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.start_motion(extend);
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, col);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.start_motion(extend);
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let col = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, col);
    }

    fn start_motion(&mut self, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
    }

    fn delete_selection(&mut self) -> bool {
        match self.selection_range() {
            Some(range) => {
                self.cursor = range.start;
                self.text.replace_range(range, "");
                self.anchor = None;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn prev_boundary(&self, offset: usize) -> Option<usize> {
        self.text[..offset].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self, offset: usize) -> Option<usize> {
        self.text[offset..]
            .chars()
            .next()
            .map(|c| offset + c.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(self.text.len())
    }

    fn offset_in_line(&self, line_start: usize, col: usize) -> usize {
        let line_end = self.line_end(line_start);
        self.text[line_start..line_end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| line_start + i)
            .unwrap_or(line_end)
    }
}

impl Editor for NoteBuffer {
    fn selection(&self) -> String {
        self.selection_range()
            .map(|range| self.text[range].to_string())
            .unwrap_or_default()
    }

    fn replace_selection(&mut self, text: &str) {
        self.insert_str(text);
    }
}
