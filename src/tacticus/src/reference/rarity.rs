//! Rarity tiers, star levels and the tables derived from them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Rank, ReferenceError};

/// Character rarity tier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rarity {
    #[default]
    Common = 0,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities in ascending order
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Highest rank a character of this rarity can reach
    pub fn max_rank(self) -> Rank {
        rarity_to_max_rank(self)
    }

    /// Range of star levels valid for this rarity
    pub fn star_range(self) -> (RarityStars, RarityStars) {
        (rarity_to_min_stars(self), rarity_to_max_stars(self))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> Self {
        rarity as u8
    }
}

impl TryFrom<u8> for Rarity {
    type Error = ReferenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rarity::ALL
            .get(value as usize)
            .copied()
            .ok_or(ReferenceError::RarityTier(value))
    }
}

impl FromStr for Rarity {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u8>() {
            return Rarity::try_from(value);
        }
        Rarity::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReferenceError::UnknownName {
                kind: "rarity",
                value: s.to_string(),
            })
    }
}

/// Star level within a rarity (gold stars, then red stars, then the blue star)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum RarityStars {
    #[default]
    None = 0,
    OneStar,
    TwoStars,
    ThreeStars,
    FourStars,
    FiveStars,
    RedOneStar,
    RedTwoStars,
    RedThreeStars,
    RedFourStars,
    RedFiveStars,
    BlueStar,
}

impl RarityStars {
    pub const ALL: [RarityStars; 12] = [
        RarityStars::None,
        RarityStars::OneStar,
        RarityStars::TwoStars,
        RarityStars::ThreeStars,
        RarityStars::FourStars,
        RarityStars::FiveStars,
        RarityStars::RedOneStar,
        RarityStars::RedTwoStars,
        RarityStars::RedThreeStars,
        RarityStars::RedFourStars,
        RarityStars::RedFiveStars,
        RarityStars::BlueStar,
    ];

    /// Clamp into the star range valid for `rarity`
    pub fn clamp_to(self, rarity: Rarity) -> RarityStars {
        let (min, max) = rarity.star_range();
        self.clamp(min, max)
    }
}

impl From<RarityStars> for u8 {
    fn from(stars: RarityStars) -> Self {
        stars as u8
    }
}

impl TryFrom<u8> for RarityStars {
    type Error = ReferenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RarityStars::ALL
            .get(value as usize)
            .copied()
            .ok_or(ReferenceError::StarLevel(value))
    }
}

impl fmt::Display for RarityStars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = *self as u8;
        match value {
            0 => f.write_str("No stars"),
            1..=5 => write!(f, "{} gold", value),
            6..=10 => write!(f, "{} red", value - 5),
            _ => f.write_str("Blue star"),
        }
    }
}

pub fn rarity_to_max_rank(rarity: Rarity) -> Rank {
    match rarity {
        Rarity::Common => Rank::Iron1,
        Rarity::Uncommon => Rank::Bronze1,
        Rarity::Rare => Rank::Silver1,
        Rarity::Epic => Rank::Gold1,
        Rarity::Legendary => Rank::Diamond3,
    }
}

pub fn rarity_to_min_stars(rarity: Rarity) -> RarityStars {
    match rarity {
        Rarity::Common => RarityStars::None,
        Rarity::Uncommon => RarityStars::TwoStars,
        Rarity::Rare => RarityStars::FourStars,
        Rarity::Epic => RarityStars::RedOneStar,
        Rarity::Legendary => RarityStars::RedThreeStars,
    }
}

pub fn rarity_to_max_stars(rarity: Rarity) -> RarityStars {
    match rarity {
        Rarity::Common => RarityStars::TwoStars,
        Rarity::Uncommon => RarityStars::FourStars,
        Rarity::Rare => RarityStars::RedOneStar,
        Rarity::Epic => RarityStars::RedThreeStars,
        Rarity::Legendary => RarityStars::BlueStar,
    }
}
