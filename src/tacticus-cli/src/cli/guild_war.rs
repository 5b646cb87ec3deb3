//! Guild war command CLI definitions

use clap::Subcommand;
use tacticus::Rarity;

#[derive(Subcommand)]
pub enum GuildWarCommand {
    /// Show teams, deployment and battlefield settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a team's lineup (up to five characters)
    Team {
        /// Team id (e.g. defense-1, offense-3)
        team_id: String,

        /// Character names in slot order
        #[arg(required = true)]
        characters: Vec<String>,

        /// Highest rarity allowed in the team
        #[arg(long, default_value = "Legendary")]
        cap: Rarity,

        /// Rename the team (25 characters max)
        #[arg(long)]
        name: Option<String>,
    },

    /// Empty a team's lineup
    ClearTeam { team_id: String },

    /// Set rarity caps for the defense teams, in order
    Caps {
        #[arg(required = true)]
        caps: Vec<Rarity>,
    },

    /// Set the battlefield level
    BfLevel { level: u8 },

    /// Set the zone difficulty
    ZoneDifficulty { difficulty: u8 },

    /// Set the battlefield section
    Section { section: String },

    /// Set a layout's battlefield level
    LayoutBf { layout_id: String, level: u8 },

    /// Swap two zones in a layout by position
    SwapZones {
        layout_id: String,
        first: usize,
        second: usize,
    },

    /// Mark characters as deployed on offense
    Deploy {
        #[arg(required = true)]
        characters: Vec<String>,
    },

    /// Mark characters as available again
    Withdraw {
        #[arg(required = true)]
        characters: Vec<String>,
    },

    /// Withdraw every deployed character
    ClearDeployed,

    /// Restore the default guild war state
    Reset,
}
