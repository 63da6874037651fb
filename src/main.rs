use anyhow::Result;
use clap::Parser;
use log::info;

use stock_info::{
    api::YahooApi,
    app::{App, NoteBuffer},
    config::{Args, load_env},
    logging::init_logger,
    services::StockInfoService,
};

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = load_env();
    let args = Args::parse();

    init_logger(&args.log_path())?;
    info!("reloaded");
    if let Some(env_file) = env_file {
        info!("Loaded environment from {}", env_file.display());
    }

    let note_path = args.note_path();
    let note = NoteBuffer::load(&note_path)?;
    let service = StockInfoService::new(YahooApi::new());

    let mut app = App::new(note, note_path, service);
    app.run().await?;

    Ok(())
}
