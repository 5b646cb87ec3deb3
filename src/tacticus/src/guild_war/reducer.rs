//! Guild war state transitions
//!
//! Every transition borrows the current aggregate and returns a new one.
//! Lookups by team or layout id that miss return the state unchanged.

use serde::{Deserialize, Serialize};

use super::models::{GuildWar, GuildWarTeamType, LINEUP_SIZE, TEAM_NAME_MAX_LEN};
use crate::reference::Rarity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GuildWarAction {
    Set {
        #[serde(default)]
        value: Option<GuildWar>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateTeam {
        team_id: String,
        lineup: Vec<String>,
        rarity_cap: Rarity,
        #[serde(default)]
        team_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateDefenseRarityCaps { rarity_caps: Vec<Rarity> },
    #[serde(rename_all = "camelCase")]
    ClearTeamLineup { team_id: String },
    #[serde(rename_all = "camelCase")]
    UpdateZoneDifficulty { zone_difficulty: u8 },
    #[serde(rename_all = "camelCase")]
    UpdateBfLevel { battlefield_level: u8 },
    #[serde(rename_all = "camelCase")]
    UpdateBfSection { section_id: String },
    #[serde(rename_all = "camelCase")]
    UpdateLayoutBfLevel { layout_id: String, bf_level: u8 },
    #[serde(rename_all = "camelCase")]
    SwapLayoutZones {
        layout_id: String,
        zone1_index: usize,
        zone2_index: usize,
    },
    DeployCharacter { character: String },
    WithdrawCharacter { character: String },
    ClearDeployedCharacters,
}

/// Apply `action` to `state`, returning the new aggregate.
pub fn guild_war_reducer(state: &GuildWar, action: GuildWarAction) -> GuildWar {
    match action {
        GuildWarAction::Set { value } => value.unwrap_or_default(),
        GuildWarAction::UpdateTeam {
            team_id,
            lineup,
            rarity_cap,
            team_name,
        } => update_team(state, &team_id, lineup, rarity_cap, team_name),
        GuildWarAction::UpdateDefenseRarityCaps { rarity_caps } => {
            let mut teams = state.teams.clone();
            for (index, team) in teams
                .iter_mut()
                .filter(|t| t.team_type == GuildWarTeamType::Defense)
                .enumerate()
            {
                team.rarity_cap = rarity_caps.get(index).copied().unwrap_or(Rarity::Legendary);
            }
            GuildWar {
                teams,
                ..state.clone()
            }
        }
        GuildWarAction::ClearTeamLineup { team_id } => {
            let Some(index) = state.teams.iter().position(|t| t.id == team_id) else {
                tracing::debug!("team {} not found, nothing to clear", team_id);
                return state.clone();
            };
            let mut teams = state.teams.clone();
            teams[index].lineup = Vec::new();
            GuildWar {
                teams,
                ..state.clone()
            }
        }
        GuildWarAction::UpdateZoneDifficulty { zone_difficulty } => GuildWar {
            zone_difficulty,
            ..state.clone()
        },
        GuildWarAction::UpdateBfLevel { battlefield_level } => GuildWar {
            battlefield_level,
            ..state.clone()
        },
        GuildWarAction::UpdateBfSection { section_id } => GuildWar {
            section_id,
            ..state.clone()
        },
        GuildWarAction::UpdateLayoutBfLevel {
            layout_id,
            bf_level,
        } => {
            let Some(index) = state.layouts.iter().position(|l| l.id == layout_id) else {
                tracing::debug!("layout {} not found", layout_id);
                return state.clone();
            };
            let mut layouts = state.layouts.clone();
            layouts[index].bf_level = bf_level;
            GuildWar {
                layouts,
                ..state.clone()
            }
        }
        GuildWarAction::SwapLayoutZones {
            layout_id,
            zone1_index,
            zone2_index,
        } => {
            let Some(index) = state.layouts.iter().position(|l| l.id == layout_id) else {
                tracing::debug!("layout {} not found", layout_id);
                return state.clone();
            };
            let zone_count = state.layouts[index].zones.len();
            if zone1_index >= zone_count || zone2_index >= zone_count {
                tracing::debug!(
                    "zone index out of range for layout {}: {} / {} of {}",
                    layout_id,
                    zone1_index,
                    zone2_index,
                    zone_count
                );
                return state.clone();
            }
            let mut layouts = state.layouts.clone();
            layouts[index].zones.swap(zone1_index, zone2_index);
            GuildWar {
                layouts,
                ..state.clone()
            }
        }
        GuildWarAction::DeployCharacter { character } => {
            if state.is_deployed(&character) {
                return state.clone();
            }
            let mut deployed_characters = state.deployed_characters.clone();
            deployed_characters.push(character);
            GuildWar {
                deployed_characters,
                ..state.clone()
            }
        }
        GuildWarAction::WithdrawCharacter { character } => {
            if !state.is_deployed(&character) {
                return state.clone();
            }
            let deployed_characters = state
                .deployed_characters
                .iter()
                .filter(|c| **c != character)
                .cloned()
                .collect();
            GuildWar {
                deployed_characters,
                ..state.clone()
            }
        }
        GuildWarAction::ClearDeployedCharacters => GuildWar {
            deployed_characters: Vec::new(),
            ..state.clone()
        },
    }
}

fn update_team(
    state: &GuildWar,
    team_id: &str,
    lineup: Vec<String>,
    rarity_cap: Rarity,
    team_name: Option<String>,
) -> GuildWar {
    let Some(index) = state.teams.iter().position(|t| t.id == team_id) else {
        tracing::debug!("team {} not found, ignoring update", team_id);
        return state.clone();
    };

    let mut lineup_set: Vec<String> = Vec::with_capacity(LINEUP_SIZE);
    for name in lineup {
        if lineup_set.len() == LINEUP_SIZE {
            break;
        }
        if !lineup_set.contains(&name) {
            lineup_set.push(name);
        }
    }

    let team_type = state.teams[index].team_type;
    let mut teams = state.teams.clone();

    for (i, other) in teams.iter_mut().enumerate() {
        if i != index && other.team_type == team_type {
            other.lineup.retain(|name| !lineup_set.contains(name));
        }
    }

    let team = &mut teams[index];
    team.lineup = lineup_set;
    team.rarity_cap = rarity_cap;
    if let Some(name) = team_name.filter(|n| !n.is_empty()) {
        team.name = name.chars().take(TEAM_NAME_MAX_LEN).collect();
    }

    GuildWar {
        teams,
        ..state.clone()
    }
}
