//! Guild war teams, layouts and zones

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::reference::{normalize, Rarity, ReferenceError};

/// Maximum characters in a team lineup
pub const LINEUP_SIZE: usize = 5;

/// Maximum team name length, in characters
pub const TEAM_NAME_MAX_LEN: usize = 25;

pub const DEFENSE_TEAM_COUNT: usize = 5;
pub const OFFENSE_TEAM_COUNT: usize = 10;

/// Battlefield levels a layout can target
pub const BATTLEFIELD_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GuildWarTeamType {
    Defense = 0,
    Offense = 1,
}

impl From<GuildWarTeamType> for u8 {
    fn from(t: GuildWarTeamType) -> Self {
        t as u8
    }
}

impl TryFrom<u8> for GuildWarTeamType {
    type Error = ReferenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GuildWarTeamType::Defense),
            1 => Ok(GuildWarTeamType::Offense),
            other => Err(ReferenceError::UnknownName {
                kind: "team type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for GuildWarTeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuildWarTeamType::Defense => f.write_str("Defense"),
            GuildWarTeamType::Offense => f.write_str("Offense"),
        }
    }
}

/// Kinds of zones on a guild war battlefield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneId {
    Armoury,
    TroopGarrison,
    Frontline,
    SupplyDepot,
    ArtilleryPosition,
    AntiAirBattery,
    FortifiedPosition,
    VoxStation,
    MedicaeStation,
    HeadQuarters,
}

impl ZoneId {
    pub const ALL: [ZoneId; 10] = [
        ZoneId::Armoury,
        ZoneId::TroopGarrison,
        ZoneId::Frontline,
        ZoneId::SupplyDepot,
        ZoneId::ArtilleryPosition,
        ZoneId::AntiAirBattery,
        ZoneId::FortifiedPosition,
        ZoneId::VoxStation,
        ZoneId::MedicaeStation,
        ZoneId::HeadQuarters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ZoneId::Armoury => "Armoury",
            ZoneId::TroopGarrison => "Troop Garrison",
            ZoneId::Frontline => "Frontline",
            ZoneId::SupplyDepot => "Supply Depot",
            ZoneId::ArtilleryPosition => "Artillery Position",
            ZoneId::AntiAirBattery => "Anti-Air Battery",
            ZoneId::FortifiedPosition => "Fortified Position",
            ZoneId::VoxStation => "Vox Station",
            ZoneId::MedicaeStation => "Medicae Station",
            ZoneId::HeadQuarters => "Headquarters",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZoneId {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ZoneId::ALL
            .iter()
            .copied()
            .find(|z| normalize(z.name()) == wanted)
            .ok_or_else(|| ReferenceError::UnknownName {
                kind: "zone",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildWarTeam {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub team_type: GuildWarTeamType,
    pub rarity_cap: Rarity,
    /// Character names, in slot order
    pub lineup: Vec<String>,
}

impl GuildWarTeam {
    pub fn new(id: impl Into<String>, name: impl Into<String>, team_type: GuildWarTeamType) -> Self {
        GuildWarTeam {
            id: id.into(),
            name: name.into(),
            team_type,
            rarity_cap: Rarity::Legendary,
            lineup: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildWarLayoutZone {
    pub id: ZoneId,
    /// Guild members assigned to this zone
    #[serde(default)]
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildWarLayout {
    pub id: String,
    pub name: String,
    pub bf_level: u8,
    pub zones: Vec<GuildWarLayoutZone>,
}

impl GuildWarLayout {
    /// A layout with one empty entry per zone kind
    pub fn new(id: impl Into<String>, name: impl Into<String>, bf_level: u8) -> Self {
        GuildWarLayout {
            id: id.into(),
            name: name.into(),
            bf_level,
            zones: ZoneId::ALL
                .iter()
                .map(|&id| GuildWarLayoutZone {
                    id,
                    players: Vec::new(),
                })
                .collect(),
        }
    }
}

/// Guild war planning state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuildWar {
    pub battlefield_level: u8,
    pub zone_difficulty: u8,
    pub section_id: String,
    pub teams: Vec<GuildWarTeam>,
    pub layouts: Vec<GuildWarLayout>,
    /// Characters committed to offense
    pub deployed_characters: Vec<String>,
}

impl Default for GuildWar {
    fn default() -> Self {
        let defense = (1..=DEFENSE_TEAM_COUNT).map(|i| {
            GuildWarTeam::new(
                format!("defense-{}", i),
                format!("Defense {}", i),
                GuildWarTeamType::Defense,
            )
        });
        let offense = (1..=OFFENSE_TEAM_COUNT).map(|i| {
            GuildWarTeam::new(
                format!("offense-{}", i),
                format!("Offense {}", i),
                GuildWarTeamType::Offense,
            )
        });
        let layouts = BATTLEFIELD_LEVELS
            .map(|level| {
                GuildWarLayout::new(
                    format!("layout-{}", level),
                    format!("Battlefield {}", level),
                    level,
                )
            })
            .collect();

        GuildWar {
            battlefield_level: 1,
            zone_difficulty: 0,
            section_id: ZoneId::Frontline.name().to_string(),
            teams: defense.chain(offense).collect(),
            layouts,
            deployed_characters: Vec::new(),
        }
    }
}

impl GuildWar {
    pub fn team(&self, id: &str) -> Option<&GuildWarTeam> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn layout(&self, id: &str) -> Option<&GuildWarLayout> {
        self.layouts.iter().find(|l| l.id == id)
    }

    pub fn teams_of(&self, team_type: GuildWarTeamType) -> impl Iterator<Item = &GuildWarTeam> {
        self.teams.iter().filter(move |t| t.team_type == team_type)
    }

    pub fn is_deployed(&self, character: &str) -> bool {
        self.deployed_characters.iter().any(|c| c == character)
    }

    /// Names of characters in any offense lineup that are not deployed
    pub fn available_offense(&self) -> Vec<&str> {
        let mut available: Vec<&str> = Vec::new();
        for name in self
            .teams_of(GuildWarTeamType::Offense)
            .flat_map(|t| t.lineup.iter())
        {
            if !self.is_deployed(name) && !available.contains(&name.as_str()) {
                available.push(name);
            }
        }
        available
    }
}
