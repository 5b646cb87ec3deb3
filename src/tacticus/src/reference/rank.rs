//! Character rank ladder

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ReferenceError;

/// Character rank, from locked through Diamond III.
///
/// Serialized as its numeric tier so snapshots stay compatible with the
/// planner's stored data.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    #[default]
    Locked = 0,
    Stone1,
    Stone2,
    Stone3,
    Iron1,
    Iron2,
    Iron3,
    Bronze1,
    Bronze2,
    Bronze3,
    Silver1,
    Silver2,
    Silver3,
    Gold1,
    Gold2,
    Gold3,
    Diamond1,
    Diamond2,
    Diamond3,
}

impl Rank {
    /// All ranks in ascending order
    pub const ALL: [Rank; 19] = [
        Rank::Locked,
        Rank::Stone1,
        Rank::Stone2,
        Rank::Stone3,
        Rank::Iron1,
        Rank::Iron2,
        Rank::Iron3,
        Rank::Bronze1,
        Rank::Bronze2,
        Rank::Bronze3,
        Rank::Silver1,
        Rank::Silver2,
        Rank::Silver3,
        Rank::Gold1,
        Rank::Gold2,
        Rank::Gold3,
        Rank::Diamond1,
        Rank::Diamond2,
        Rank::Diamond3,
    ];

    /// Numeric tier (0 = locked)
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Get a rank by numeric tier
    pub fn from_tier(tier: u8) -> Option<Rank> {
        Self::ALL.get(tier as usize).copied()
    }

    /// The rank directly above this one, if any
    pub fn next(self) -> Option<Rank> {
        Self::from_tier(self.tier() + 1)
    }

    /// Material name of the rank ("Stone", "Iron", ...)
    pub fn material(self) -> &'static str {
        match self.tier() {
            0 => "Locked",
            1..=3 => "Stone",
            4..=6 => "Iron",
            7..=9 => "Bronze",
            10..=12 => "Silver",
            13..=15 => "Gold",
            _ => "Diamond",
        }
    }

    /// Step within the material (1-3), 0 for locked
    pub fn step(self) -> u8 {
        match self {
            Rank::Locked => 0,
            _ => (self.tier() - 1) % 3 + 1,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self.step() {
            0 => return f.write_str("Locked"),
            1 => "I",
            2 => "II",
            _ => "III",
        };
        write!(f, "{} {}", self.material(), numeral)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.tier()
    }
}

impl TryFrom<u8> for Rank {
    type Error = ReferenceError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Rank::from_tier(tier).ok_or(ReferenceError::RankTier(tier))
    }
}

/// Accepts "Gold II", "gold2", "Gold2" or a numeric tier.
impl FromStr for Rank {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        if let Ok(tier) = compact.parse::<u8>() {
            return Rank::try_from(tier);
        }

        Rank::ALL
            .iter()
            .copied()
            .find(|rank| {
                let name = rank.to_string().replace(' ', "").to_ascii_lowercase();
                let digit = format!("{}{}", rank.material().to_ascii_lowercase(), rank.step());
                compact == name || compact == digit
            })
            .ok_or_else(|| ReferenceError::UnknownName {
                kind: "rank",
                value: s.to_string(),
            })
    }
}
