//! Goal command CLI definitions

use clap::{Subcommand, ValueEnum};
use tacticus::{PersonalGoalType, Rank, Rarity};

#[derive(Clone, Copy, ValueEnum)]
pub enum GoalKind {
    Rank,
    Ascend,
    Unlock,
}

impl From<GoalKind> for PersonalGoalType {
    fn from(kind: GoalKind) -> Self {
        match kind {
            GoalKind::Rank => PersonalGoalType::UpgradeRank,
            GoalKind::Ascend => PersonalGoalType::Ascend,
            GoalKind::Unlock => PersonalGoalType::Unlock,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalsCommand {
    /// List goals in priority order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a goal
    Add {
        /// Character name
        character: String,

        /// Goal kind
        #[arg(short = 't', long = "type", value_enum, default_value = "rank")]
        kind: GoalKind,

        /// Target rank (rank goals)
        #[arg(long)]
        rank: Option<Rank>,

        /// Aim for half-way into the rank after the target
        #[arg(long)]
        point5: bool,

        /// Target rarity (ascend goals)
        #[arg(long)]
        rarity: Option<Rarity>,

        /// Priority, 1 is first (defaults to last)
        #[arg(short, long)]
        priority: Option<u32>,

        #[arg(long)]
        notes: Option<String>,

        /// Allow targets beyond what the current rarity permits
        #[arg(long)]
        ignore_rank_rarity: bool,
    },

    /// Remove a goal by id (a unique prefix is enough)
    Remove { id: String },
}
