use clap::Parser;
use dashboard_core::storage::config::Config;
use log::debug;
use std::path::PathBuf;

mod cli;
mod logging;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load Config
    let config_dir = cli.config_dir.as_ref().map(PathBuf::from);
    let config_path = config_dir.as_deref().map(Config::file_in);

    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(dir) = &config_dir {
        debug!("using config directory: {}", dir.display());
    }

    let dispatcher = Dispatcher::new(config, config_dir, cli.api_base, cli.json);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} Error: {}", e.severity().emoji(), e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("💡 {}", hint);
        }
        std::process::exit(1);
    }
}
