//! Character command CLI definitions

use clap::Subcommand;
use tacticus::{CharacterBias, Faction, Rank, Rarity};

#[derive(Subcommand)]
pub enum CharactersCommand {
    /// List characters with their progress
    List {
        /// Only unlocked characters
        #[arg(short, long)]
        unlocked: bool,

        /// Only characters of this faction
        #[arg(short, long)]
        faction: Option<Faction>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a character's progress
    Set {
        /// Character name
        name: String,

        /// Rank (e.g. "Gold II", "gold2" or 13)
        #[arg(long)]
        rank: Option<Rank>,

        /// Rarity (e.g. "Epic" or 3)
        #[arg(long)]
        rarity: Option<Rarity>,

        /// Star level, 0 (none) to 11 (blue star)
        #[arg(long)]
        stars: Option<u8>,

        #[arg(long)]
        shards: Option<u32>,

        /// Character level
        #[arg(long)]
        level: Option<u32>,

        /// Experience toward the next level (with --level)
        #[arg(long, requires = "level", default_value_t = 0)]
        xp: u32,

        /// Recommendation bias (none, always, never)
        #[arg(long)]
        bias: Option<CharacterBias>,
    },

    /// Reset a character to default progress
    Reset {
        /// Character name
        name: String,
    },
}
