//! Command line interface for inspecting and editing saved panel state

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{save_default_tab, Config};
use crate::data::{AppStateStore, Database, DebugStateStore};
use crate::panel::{storage_key, PanelState};
use crate::util;

#[derive(Debug, Parser)]
#[command(name = "djust-debug-state", version)]
#[command(about = "Inspect and edit persisted djust debug panel state")]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Data directory (defaults to ~/.djust-debug)
    #[arg(global = true, long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Database file, overriding the config file and data directory
    #[arg(global = true, long, value_name = "PATH")]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ViewArg {
    /// View identifier; omit for the global scope
    #[arg(long, short = 'v')]
    pub view: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the storage key for a view
    Key(ViewArg),
    /// Print the restored panel state as JSON
    Show(ViewArg),
    /// Update and persist the panel state for a view
    Save {
        #[command(flatten)]
        view: ViewArg,
        /// Mark the panel as open
        #[arg(long, conflicts_with = "closed")]
        open: bool,
        /// Mark the panel as closed
        #[arg(long)]
        closed: bool,
        /// Active tab
        #[arg(long, short = 't')]
        tab: Option<String>,
    },
    /// Remove saved state for a view
    Clear(ViewArg),
    /// List views that have saved state
    Views,
    /// Edit the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set the tab shown when nothing has been saved
    SetDefaultTab { tab: String },
}

impl Cli {
    /// Execute the parsed command, writing results to stdout
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Key(ViewArg { view }) => {
                println!("{}", storage_key(view.as_deref()));
            }
            Command::Show(ViewArg { view }) => {
                let config = Config::load();
                let states = open_store(&self.global, &config)?;
                let state = states.restore(view.as_deref(), config.default_panel_state());
                print_state(&state)?;
            }
            Command::Save {
                view: ViewArg { view },
                open,
                closed,
                tab,
            } => {
                let config = Config::load();
                let states = open_store(&self.global, &config)?;
                let mut state = states.restore(view.as_deref(), config.default_panel_state());
                if open || closed {
                    state.is_open = open;
                }
                if let Some(tab) = tab {
                    state.active_tab = tab;
                }
                states
                    .persist(&state, view.as_deref())
                    .context("Failed to save panel state")?;
                print_state(&state)?;
            }
            Command::Clear(ViewArg { view }) => {
                let states = open_store(&self.global, &Config::load())?;
                states
                    .forget(view.as_deref())
                    .context("Failed to clear panel state")?;
            }
            Command::Views => {
                let states = open_store(&self.global, &Config::load())?;
                for view in states.views().context("Failed to list views")? {
                    println!("{}", view);
                }
            }
            Command::Config(ConfigCommand::SetDefaultTab { tab }) => {
                let path = util::config_path();
                save_default_tab(&path, &tab)
                    .with_context(|| format!("Failed to update {}", path.display()))?;
            }
        }

        Ok(())
    }
}

fn open_store(global: &GlobalOptions, config: &Config) -> Result<DebugStateStore<AppStateStore>> {
    let path = global
        .database
        .clone()
        .or_else(|| config.database_path.clone())
        .unwrap_or_else(util::database_path);
    let db = Database::open(path.clone())
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    Ok(DebugStateStore::new(AppStateStore::new(db.connection())))
}

fn print_state(state: &PanelState) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
