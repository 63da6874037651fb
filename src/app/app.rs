use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use strum::IntoEnumIterator;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
};

use crate::{
    api::QuoteProvider,
    app::{Command, DialogAction, NoteBuffer, NoticeBoard, TickerDialog, ui},
    models::QuoteRequest,
    services::{Editor, StockInfoService},
};

const TICK: Duration = Duration::from_millis(250);

pub struct App<P: QuoteProvider> {
    note: NoteBuffer,
    note_path: PathBuf,
    service: StockInfoService<P>,
    dialog: Option<TickerDialog>,
    notices: NoticeBoard,
    popup_message: Option<String>,
    show_palette: bool,
    palette_state: ListState,
}

impl<P: QuoteProvider> App<P> {
    pub fn new(note: NoteBuffer, note_path: PathBuf, service: StockInfoService<P>) -> Self {
        let mut palette_state = ListState::default();
        palette_state.select(Some(0));
        Self {
            note,
            note_path,
            service,
            dialog: None,
            notices: NoticeBoard::new(),
            popup_message: None,
            show_palette: false,
            palette_state,
        }
    }

    pub fn note(&self) -> &NoteBuffer {
        &self.note
    }

    pub fn dialog(&self) -> Option<&TickerDialog> {
        self.dialog.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notices.active(Instant::now())
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let notice = self.notices.active(Instant::now());
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.note,
                &self.note_path,
                self.dialog.as_ref(),
                notice,
                self.popup_message.as_deref(),
                self.show_palette,
                &mut self.palette_state,
            )
        })?;
        Ok(())
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.notices.expire(Instant::now());
            self.draw(terminal)?;

            if !event::poll(TICK)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.handle_key(terminal, key).await? {
                    return Ok(());
                }
            }
        }
    }

    /// Returns `true` when the app should exit.
    pub async fn handle_key<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        key: KeyEvent,
    ) -> Result<bool> {
        if self.notices.active(Instant::now()).is_some()
            && matches!(key.code, KeyCode::Enter | KeyCode::Esc)
        {
            self.notices.dismiss();
            return Ok(false);
        }

        if let Some(dialog) = self.dialog.as_mut() {
            match dialog.handle_key(key) {
                Some(DialogAction::Confirm(ticker)) => {
                    self.dialog = None;
                    self.insert_stock_info(terminal, ticker).await?;
                }
                Some(DialogAction::Cancel) => self.dialog = None,
                None => {}
            }
            return Ok(false);
        }

        if self.show_palette {
            return self.handle_palette_key(key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') if ctrl => return self.execute(Command::Quit),
            KeyCode::Char('s') if ctrl => return self.execute(Command::SaveNote),
            KeyCode::Char('k') if ctrl => return self.execute(Command::InsertStockInfo),
            KeyCode::Char('p') if ctrl => {
                self.palette_state.select(Some(0));
                self.show_palette = true;
            }
            KeyCode::Char('a') if ctrl => self.note.select_all(),
            KeyCode::Char(c) if !ctrl => self.note.insert_char(c),
            KeyCode::Enter => self.note.insert_char('\n'),
            KeyCode::Tab => self.note.insert_char('\t'),
            KeyCode::Backspace => self.note.backspace(),
            KeyCode::Delete => self.note.delete(),
            KeyCode::Left => self.note.move_left(shift),
            KeyCode::Right => self.note.move_right(shift),
            KeyCode::Up => self.note.move_up(shift),
            KeyCode::Down => self.note.move_down(shift),
            KeyCode::Home => self.note.move_home(shift),
            KeyCode::End => self.note.move_end(shift),
            _ => {}
        }

        Ok(false)
    }

    fn handle_palette_key(&mut self, key: KeyEvent) -> Result<bool> {
        let len = Command::iter().len();
        match key.code {
            KeyCode::Esc => self.show_palette = false,
            KeyCode::Down => {
                let i = match self.palette_state.selected() {
                    Some(i) => {
                        if i >= len - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.palette_state.select(Some(i));
            }
            KeyCode::Up => {
                let i = match self.palette_state.selected() {
                    Some(i) => {
                        if i == 0 {
                            len - 1
                        } else {
                            i - 1
                        }
                    }
                    None => 0,
                };
                self.palette_state.select(Some(i));
            }
            KeyCode::Enter => {
                let i = self.palette_state.selected().unwrap_or(0);
                let command = Command::iter()
                    .nth(i)
                    .with_context(|| "Cannot select command")?;
                self.show_palette = false;
                return self.execute(command);
            }
            _ => {}
        }
        Ok(false)
    }

    fn execute(&mut self, command: Command) -> Result<bool> {
        info!("Command: {}", command.id());
        match command {
            Command::InsertStockInfo => {
                self.dialog = Some(TickerDialog::open(&self.note.selection()));
            }
            Command::SaveNote => match self.note.save(&self.note_path) {
                Ok(()) => info!("Saved {}", self.note_path.display()),
                Err(e) => {
                    error!("{}", e);
                    self.notices.show_at(
                        &e.to_string(),
                        Duration::from_secs(5),
                        Instant::now(),
                    );
                }
            },
            Command::Quit => return Ok(true),
        }
        Ok(false)
    }

    async fn insert_stock_info<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ticker: String,
    ) -> Result<()> {
        let request = QuoteRequest::new(ticker);
        self.show_popup(&format!("Fetching {}...", request.symbol()));
        self.draw(terminal)?;

        self.service
            .insert_stock_info(&request, &mut self.note, &mut self.notices)
            .await;

        self.clear_popup();
        Ok(())
    }
}
