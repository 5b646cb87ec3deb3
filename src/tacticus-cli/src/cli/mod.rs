//! CLI argument definitions for tacticus
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod characters;
mod core;
mod events;
mod goals;
mod guild_war;

pub use characters::CharactersCommand;
pub use core::{Cli, Commands};
pub use events::EventsCommand;
pub use goals::GoalsCommand;
pub use guild_war::GuildWarCommand;
