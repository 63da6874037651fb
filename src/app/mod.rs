pub mod app;
pub mod commands;
pub mod dialog;
pub mod editor;
pub mod notice;
pub mod ui;

pub use app::App;
pub use commands::Command;
pub use dialog::{DialogAction, TickerDialog};
pub use editor::NoteBuffer;
pub use notice::NoticeBoard;
