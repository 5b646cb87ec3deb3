//! Personal goals: unlock, ascend or rank up a character, in priority order.

mod draft;
mod reducer;

pub use draft::{allowed_characters, allowed_ranks, allowed_rarities, validate_goal};
pub use reducer::{goals_reducer, GoalsAction};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::{Rank, Rarity};

/// Most goals a player can have at once
pub const GOALS_LIMIT: usize = 20;

/// Longest allowed goal note, in characters
pub const NOTES_MAX_LEN: usize = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error("Goal is for {goal}, not {character}")]
    CharacterMismatch { goal: String, character: String },

    #[error("Goal has no target {0}")]
    MissingTarget(&'static str),

    #[error("{0} has already reached this goal")]
    AlreadyReached(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalGoalType {
    #[default]
    UpgradeRank,
    Ascend,
    Unlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalGoal {
    pub id: String,
    pub character: String,
    #[serde(rename = "type")]
    pub goal_type: PersonalGoalType,
    /// 1 is the most important
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rarity: Option<Rarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rank: Option<Rank>,
    /// Target is half-way into the next rank
    #[serde(default)]
    pub rank_point5: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards_per_day_or_token: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_per_day: Option<u32>,
    #[serde(default = "default_daily_raids")]
    pub daily_raids: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub upgrades: Vec<String>,
}

fn default_daily_raids() -> bool {
    true
}

impl PersonalGoal {
    /// A fresh goal with a random id
    pub fn new(character: impl Into<String>, goal_type: PersonalGoalType, priority: u32) -> Self {
        PersonalGoal {
            id: uuid::Uuid::new_v4().to_string(),
            character: character.into(),
            goal_type,
            priority,
            target_rarity: None,
            target_rank: None,
            rank_point5: false,
            shards_per_day_or_token: None,
            energy_per_day: None,
            daily_raids: true,
            notes: None,
            upgrades: Vec::new(),
        }
    }

    pub fn with_target_rank(mut self, rank: Rank) -> Self {
        self.target_rank = Some(rank);
        self
    }

    pub fn with_target_rarity(mut self, rarity: Rarity) -> Self {
        self.target_rarity = Some(rarity);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
