mod cli;
mod commands;
mod config;
mod dispatch;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use std::path::PathBuf;
use tacticus::{FileStore, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tacticus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_store(data_dir: Option<PathBuf>) -> Result<Store<FileStore>> {
    let config = Config::load()?;
    let dir = match data_dir {
        Some(dir) => dir,
        None => config.data_dir()?,
    };
    let storage = FileStore::new(&dir).with_backup(config.backup_enabled());
    Store::load(storage)
        .with_context(|| format!("Failed to load personal data from {}", dir.display()))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Configure {
            data_dir,
            backup,
            show,
        } => commands::configure::handle(data_dir, backup, show),

        Commands::Characters { command } => {
            let mut store = open_store(cli.dir)?;
            dispatch::dispatch_characters(&mut store, command)
        }

        Commands::Goals { command } => {
            let mut store = open_store(cli.dir)?;
            dispatch::dispatch_goals(&mut store, command)
        }

        Commands::Gw { command } => {
            let mut store = open_store(cli.dir)?;
            dispatch::dispatch_guild_war(&mut store, command)
        }

        Commands::Events { command } => {
            let mut store = open_store(cli.dir)?;
            dispatch::dispatch_events(&mut store, command)
        }
    }
}
