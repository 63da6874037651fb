use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "stock-info", version, about = "Edit a Markdown note and insert live stock quotes")]
pub struct Args {
    /// Markdown note to open; created on first save
    pub note: String,

    /// Where diagnostics are written (the terminal belongs to the editor)
    #[arg(long, default_value = "stock-info.log")]
    pub log_file: String,
}

impl Args {
    pub fn note_path(&self) -> PathBuf {
        expand_path(&self.note)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_path(&self.log_file)
    }
}

pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).as_ref())
}

/// Loads `.env` if present so `RUST_LOG` can live there.
pub fn load_env() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
