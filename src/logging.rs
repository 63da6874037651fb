use std::{fs::OpenOptions, path::Path};

use crate::error::StockInfoError;

/// Logs at `Info` unless `RUST_LOG` says otherwise, appending to `path`.
pub fn init_logger(path: &Path) -> Result<(), StockInfoError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| StockInfoError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
