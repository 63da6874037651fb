use strum_macros::{Display, EnumIter};

/// Actions listed in the command palette.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Command {
    #[strum(serialize = "Insert stock info")]
    InsertStockInfo,
    #[strum(serialize = "Save note")]
    SaveNote,
    #[strum(serialize = "Quit")]
    Quit,
}

impl Command {
    pub fn id(&self) -> &'static str {
        match self {
            Command::InsertStockInfo => "insert-stock-info",
            Command::SaveNote => "save-note",
            Command::Quit => "quit",
        }
    }
}
