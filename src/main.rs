use castview::LogLevel;
use castview::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "castview", about = "Terminal viewer for the Rick and Morty character list")]
struct Args {
    /// Character endpoint to fetch (overrides config and CASTVIEW_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Log file verbosity
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are reported after the logger is up
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::CastviewConfig::default(), Some(e)),
    };

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            log_level: args.log_level,
        },
    );

    // Initialize file logger - nothing goes to the terminal while the TUI owns it
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.into(), log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "castview starting up: endpoint={}, log_level={}",
        resolved.endpoint,
        resolved.log_level
    );

    castview::tui::run(resolved)
}
