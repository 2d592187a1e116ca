use std::fs::{self, OpenOptions};

use anyhow::Result;
use clap::Parser;
use debug_state::{cli::Cli, util};

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.global.data_dir.clone());

    // Initialize logging to file (~/.djust-debug/logs/djust-debug-state.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    cli.run()
}
