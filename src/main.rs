use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use billsplit::core::config;

#[derive(Parser)]
#[command(name = "billsplit", about = "Split bills with friends from the terminal")]
struct Args {
    /// Config file to use instead of ~/.billsplit/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Currency symbol shown after amounts
    #[arg(long)]
    currency: Option<String>,

    /// Where to write the debug log
    #[arg(long, default_value = "billsplit.log")]
    log_file: PathBuf,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("billsplit starting up");

    let file_config = config::load_config(args.config.as_deref()).map_err(|e| {
        log::warn!("{e}");
        io::Error::other(e)
    })?;
    let resolved = config::resolve(&file_config, args.currency.as_deref());
    log::debug!("Resolved config: {:?}", resolved);

    billsplit::tui::run(resolved)
}
