//! Serialized form of everything the player owns

use serde::{Deserialize, Serialize};

use super::{GlobalState, StoreError, ViewPreferences};
use crate::character::{merge_roster, PersonalCharacterData, UnitData};
use crate::goals::{goals_reducer, GoalsAction, PersonalGoal};
use crate::guild_war::GuildWar;
use crate::legendary_event::{LegendaryEventSelections, LegendaryEventTeams};

/// Current snapshot layout
pub const SNAPSHOT_VERSION: u32 = 1;

/// Personal data as written to storage.
///
/// Characters carry only progression; static unit data is merged back in
/// when a snapshot is turned into a [`GlobalState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDataSnapshot {
    pub version: u32,
    pub characters: Vec<PersonalCharacterData>,
    pub goals: Vec<PersonalGoal>,
    pub guild_war: GuildWar,
    pub view_preferences: ViewPreferences,
    pub legendary_events: LegendaryEventSelections,
    pub legendary_event_teams: LegendaryEventTeams,
}

impl Default for PersonalDataSnapshot {
    fn default() -> Self {
        PersonalDataSnapshot {
            version: SNAPSHOT_VERSION,
            characters: Vec::new(),
            goals: Vec::new(),
            guild_war: GuildWar::default(),
            view_preferences: ViewPreferences::default(),
            legendary_events: LegendaryEventSelections::default(),
            legendary_event_teams: LegendaryEventTeams::default(),
        }
    }
}

impl PersonalDataSnapshot {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: PersonalDataSnapshot = serde_json::from_str(json)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Working state with progression merged onto `units`.
    ///
    /// Goals are ordered and renumbered 1..N and over-long notes are cut,
    /// as if the list had been set through the goals reducer.
    pub fn into_state(self, units: &[UnitData]) -> GlobalState {
        GlobalState {
            characters: merge_roster(units, &self.characters),
            goals: goals_reducer(
                &[],
                GoalsAction::Set {
                    value: Some(self.goals),
                },
            ),
            guild_war: self.guild_war,
            view_preferences: self.view_preferences,
            legendary_events: self.legendary_events,
            legendary_event_teams: self.legendary_event_teams,
        }
    }
}

impl From<&GlobalState> for PersonalDataSnapshot {
    fn from(state: &GlobalState) -> Self {
        PersonalDataSnapshot {
            version: SNAPSHOT_VERSION,
            characters: state.characters.iter().map(|c| c.personal_data()).collect(),
            goals: state.goals.clone(),
            guild_war: state.guild_war.clone(),
            view_preferences: state.view_preferences,
            legendary_events: state.legendary_events.clone(),
            legendary_event_teams: state.legendary_event_teams.clone(),
        }
    }
}
