//! Reference data for Tacticus characters
//!
//! Hardcoded game tables: ranks, rarities, star levels, factions, traits
//! and damage types, plus the rarity-derived limits the planner enforces
//! when progression is edited.

mod classification;
mod rank;
mod rarity;

pub(crate) use classification::normalize;
pub use classification::{Alliance, AttackType, CharacterBias, DamageType, Faction, Trait};
pub use rank::Rank;
pub use rarity::{
    rarity_to_max_rank, rarity_to_max_stars, rarity_to_min_stars, Rarity, RarityStars,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },

    #[error("Rank tier out of range: {0}")]
    RankTier(u8),

    #[error("Rarity tier out of range: {0}")]
    RarityTier(u8),

    #[error("Star level out of range: {0}")]
    StarLevel(u8),
}
