//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::characters::CharactersCommand;
use super::events::EventsCommand;
use super::goals::GoalsCommand;
use super::guild_war::GuildWarCommand;

#[derive(Parser)]
#[command(name = "tacticus")]
#[command(about = "Warhammer 40,000: Tacticus planner", long_about = None)]
pub struct Cli {
    /// Personal data directory (overrides the configured one)
    #[arg(short, long, global = true, env = "TACTICUS_DATA_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the personal data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Keep a backup of personal data before overwriting it
        #[arg(long)]
        backup: Option<bool>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// Character roster (list, set, reset)
    #[command(visible_alias = "ch")]
    Characters {
        #[command(subcommand)]
        command: CharactersCommand,
    },

    /// Personal goals (list, add, remove)
    #[command(visible_alias = "g")]
    Goals {
        #[command(subcommand)]
        command: GoalsCommand,
    },

    /// Guild war teams, layouts and deployment
    Gw {
        #[command(subcommand)]
        command: GuildWarCommand,
    },

    /// Legendary events and restriction selection
    #[command(visible_alias = "le")]
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },
}
