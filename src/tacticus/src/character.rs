//! Characters: static unit data merged with the player's progression.
//!
//! The unit roster is embedded at compile time from `share/data/characters.json`.
//! Player progression is stored separately ([`PersonalCharacterData`]) and
//! merged onto the static data with [`merge_roster`].

mod reducer;

pub use reducer::{characters_reducer, CharactersAction};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::reference::{
    rarity_to_min_stars, Alliance, AttackType, CharacterBias, DamageType, Faction, Rank, Rarity,
    RarityStars, Trait,
};

const CHARACTERS_JSON: &str = include_str!("../../../share/data/characters.json");

static BUILTIN_UNITS: Lazy<Vec<UnitData>> = Lazy::new(|| {
    serde_json::from_str(CHARACTERS_JSON).unwrap_or_else(|e| {
        tracing::error!("embedded character data is invalid: {}", e);
        Vec::new()
    })
});

/// Static unit data shipped with the planner
pub fn builtin_units() -> &'static [UnitData] {
    &BUILTIN_UNITS
}

/// Full roster with every character at default progression
pub fn default_roster() -> Vec<Character> {
    merge_roster(builtin_units(), &[])
}

/// Damage dealt by each attack and ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTypes {
    pub melee: DamageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<DamageType>,
    #[serde(default)]
    pub abilities: Vec<DamageType>,
}

impl DamageTypes {
    /// Every damage type the character can deal
    pub fn all(&self) -> impl Iterator<Item = DamageType> + '_ {
        std::iter::once(self.melee)
            .chain(self.range)
            .chain(self.abilities.iter().copied())
    }

    pub fn contains(&self, damage: DamageType) -> bool {
        self.all().any(|d| d == damage)
    }
}

/// Game data for a single unit, independent of the player's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitData {
    pub name: String,
    pub faction: Faction,
    pub base_rarity: Rarity,
    #[serde(default)]
    pub traits: Vec<Trait>,
    pub damage: DamageTypes,
    pub melee_hits: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_hits: Option<u8>,
    #[serde(default)]
    pub summons: bool,
}

impl UnitData {
    pub fn alliance(&self) -> Alliance {
        self.faction.alliance()
    }

    pub fn attack_type(&self) -> AttackType {
        match (self.melee_hits, self.range_hits) {
            (0, Some(_)) => AttackType::RangeOnly,
            (_, Some(_)) => AttackType::Both,
            _ => AttackType::MeleeOnly,
        }
    }

    /// Hit counts of every attack (melee first, then range if present)
    pub fn hit_counts(&self) -> impl Iterator<Item = u8> {
        let melee = (self.melee_hits > 0).then_some(self.melee_hits);
        melee.into_iter().chain(self.range_hits)
    }

    pub fn has_trait(&self, t: Trait) -> bool {
        self.traits.contains(&t)
    }
}

/// Player progression for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProgress {
    pub rank: Rank,
    pub rarity: Rarity,
    pub stars: RarityStars,
    pub level: u32,
    pub xp: u32,
    pub shards: u32,
    pub active_ability_level: u32,
    pub passive_ability_level: u32,
    pub upgrades: Vec<String>,
    pub bias: CharacterBias,
}

impl Default for CharacterProgress {
    fn default() -> Self {
        Self::starting(Rarity::Common)
    }
}

impl CharacterProgress {
    /// Progress of a character that has not been unlocked yet
    pub fn starting(rarity: Rarity) -> Self {
        CharacterProgress {
            rank: Rank::Locked,
            rarity,
            stars: rarity_to_min_stars(rarity),
            level: 1,
            xp: 0,
            shards: 0,
            active_ability_level: 1,
            passive_ability_level: 1,
            upgrades: Vec::new(),
            bias: CharacterBias::None,
        }
    }
}

/// A character: static unit data plus the player's progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(flatten)]
    pub unit: UnitData,
    #[serde(flatten)]
    pub progress: CharacterProgress,
}

impl Character {
    /// A character at default progression for its base rarity
    pub fn new(unit: UnitData) -> Self {
        let progress = CharacterProgress::starting(unit.base_rarity);
        Character { unit, progress }
    }

    pub fn name(&self) -> &str {
        &self.unit.name
    }

    pub fn rank(&self) -> Rank {
        self.progress.rank
    }

    pub fn rarity(&self) -> Rarity {
        self.progress.rarity
    }

    pub fn is_unlocked(&self) -> bool {
        self.progress.rank != Rank::Locked
    }

    /// Drop all progression back to the defaults for this unit
    pub fn reset(&mut self) {
        self.progress = CharacterProgress::starting(self.unit.base_rarity);
    }

    /// The persisted slice of this character
    pub fn personal_data(&self) -> PersonalCharacterData {
        PersonalCharacterData {
            name: self.unit.name.clone(),
            progress: self.progress.clone(),
        }
    }
}

/// Progression as stored in personal data, keyed by character name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCharacterData {
    pub name: String,
    #[serde(flatten)]
    pub progress: CharacterProgress,
}

/// Build the working roster from static units and stored progression.
///
/// Roster order follows `units`. Stored entries whose name is not in
/// `units` are dropped.
pub fn merge_roster(units: &[UnitData], personal: &[PersonalCharacterData]) -> Vec<Character> {
    for entry in personal {
        if !units.iter().any(|u| u.name == entry.name) {
            tracing::debug!("dropping progress for unknown character {}", entry.name);
        }
    }

    units
        .iter()
        .map(|unit| match personal.iter().find(|p| p.name == unit.name) {
            Some(entry) => Character {
                unit: unit.clone(),
                progress: entry.progress.clone(),
            },
            None => Character::new(unit.clone()),
        })
        .collect()
}
