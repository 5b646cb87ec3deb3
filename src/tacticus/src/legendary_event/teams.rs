//! Teams the player picks for each legendary event track

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::definition::TrackKey;
use super::EventError;
use crate::character::Character;

/// Most characters in one selected team
pub const SELECTED_TEAM_SIZE: usize = 5;

/// Character names by team name
pub type TrackTeams = BTreeMap<String, Vec<String>>;

/// Field selected teams are displayed by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamOrderKey {
    #[default]
    Name,
    Rank,
    Rarity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl TeamOrderKey {
    pub const ALL: [TeamOrderKey; 3] = [
        TeamOrderKey::Name,
        TeamOrderKey::Rank,
        TeamOrderKey::Rarity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TeamOrderKey::Name => "name",
            TeamOrderKey::Rank => "rank",
            TeamOrderKey::Rarity => "rarity",
        }
    }

    fn compare(self, a: &Character, b: &Character) -> Ordering {
        match self {
            TeamOrderKey::Name => a.name().cmp(b.name()),
            TeamOrderKey::Rank => a.rank().cmp(&b.rank()),
            TeamOrderKey::Rarity => a.rarity().cmp(&b.rarity()),
        }
    }
}

impl fmt::Display for TeamOrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TeamOrderKey {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamOrderKey::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EventError::UnknownOrder(s.to_string()))
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(EventError::UnknownOrder(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectedTeamOrder {
    pub order_by: TeamOrderKey,
    pub direction: SortDirection,
}

/// Selected teams by event id then track, plus how they are displayed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendaryEventTeams {
    pub events: BTreeMap<String, BTreeMap<TrackKey, TrackTeams>>,
    pub order: SelectedTeamOrder,
}

impl LegendaryEventTeams {
    /// Teams picked for one track, if any
    pub fn track_teams(&self, event_id: &str, track: TrackKey) -> Option<&TrackTeams> {
        self.events.get(event_id).and_then(|tracks| tracks.get(&track))
    }

    /// Members of one team, in the order they were picked
    pub fn team(&self, event_id: &str, track: TrackKey, team: &str) -> &[String] {
        self.track_teams(event_id, track)
            .and_then(|teams| teams.get(team))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Members of one team found in `roster`, sorted by the display order
    pub fn ordered_team<'a>(
        &self,
        event_id: &str,
        track: TrackKey,
        team: &str,
        roster: &'a [Character],
    ) -> Vec<&'a Character> {
        let mut members: Vec<&Character> = self
            .team(event_id, track, team)
            .iter()
            .filter_map(|name| roster.iter().find(|c| c.name() == name))
            .collect();
        let SelectedTeamOrder {
            order_by,
            direction,
        } = self.order;
        members.sort_by(|a, b| {
            let ordering = order_by.compare(a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        members
    }

    fn with_team(
        &self,
        event_id: String,
        track: TrackKey,
        team: String,
        members: Vec<String>,
    ) -> Self {
        let mut next = self.clone();
        let tracks = next.events.entry(event_id.clone()).or_default();
        let teams = tracks.entry(track).or_default();
        if members.is_empty() {
            teams.remove(&team);
            if teams.is_empty() {
                tracks.remove(&track);
            }
            if tracks.is_empty() {
                next.events.remove(&event_id);
            }
        } else {
            teams.insert(team, members);
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TeamsAction {
    Set {
        #[serde(default)]
        value: Option<LegendaryEventTeams>,
    },
    SelectCharacters {
        event_id: String,
        track: TrackKey,
        team: String,
        characters: Vec<String>,
    },
    DeselectCharacters {
        event_id: String,
        track: TrackKey,
        team: String,
        characters: Vec<String>,
    },
    SetOrder {
        order_by: TeamOrderKey,
        direction: SortDirection,
    },
}

/// Apply `action` to the selected teams.
///
/// Teams never hold a character twice nor more than
/// [`SELECTED_TEAM_SIZE`] characters. A full team ignores further picks.
pub fn teams_reducer(state: &LegendaryEventTeams, action: TeamsAction) -> LegendaryEventTeams {
    match action {
        TeamsAction::Set { value } => value.unwrap_or_default(),
        TeamsAction::SelectCharacters {
            event_id,
            track,
            team,
            characters,
        } => {
            let current = state.team(&event_id, track, &team);
            if current.len() >= SELECTED_TEAM_SIZE {
                tracing::debug!("{} {} team {} is full", event_id, track, team);
                return state.clone();
            }

            let mut members = current.to_vec();
            for name in characters {
                if !name.is_empty() && !members.contains(&name) {
                    members.push(name);
                }
            }
            if members.len() == current.len() {
                return state.clone();
            }
            members.truncate(SELECTED_TEAM_SIZE);
            state.with_team(event_id, track, team, members)
        }
        TeamsAction::DeselectCharacters {
            event_id,
            track,
            team,
            characters,
        } => {
            let current = state.team(&event_id, track, &team);
            let members: Vec<String> = current
                .iter()
                .filter(|name| !characters.contains(*name))
                .cloned()
                .collect();
            if members.len() == current.len() {
                return state.clone();
            }
            state.with_team(event_id, track, team, members)
        }
        TeamsAction::SetOrder {
            order_by,
            direction,
        } => LegendaryEventTeams {
            order: SelectedTeamOrder {
                order_by,
                direction,
            },
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::default_roster;
    use crate::reference::Rank;

    fn select(state: &LegendaryEventTeams, team: &str, names: &[&str]) -> LegendaryEventTeams {
        teams_reducer(
            state,
            TeamsAction::SelectCharacters {
                event_id: "aun_shi".to_string(),
                track: TrackKey::Alpha,
                team: team.to_string(),
                characters: names.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    fn deselect(state: &LegendaryEventTeams, team: &str, names: &[&str]) -> LegendaryEventTeams {
        teams_reducer(
            state,
            TeamsAction::DeselectCharacters {
                event_id: "aun_shi".to_string(),
                track: TrackKey::Alpha,
                team: team.to_string(),
                characters: names.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    fn members<'a>(state: &'a LegendaryEventTeams, team: &str) -> Vec<&'a str> {
        state
            .team("aun_shi", TrackKey::Alpha, team)
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_select_skips_duplicates() {
        let state = select(&LegendaryEventTeams::default(), "Melee", &["A", "B", "A"]);
        let state = select(&state, "Melee", &["B", "C"]);
        assert_eq!(members(&state, "Melee"), vec!["A", "B", "C"]);

        let again = select(&state, "Melee", &["C", "A"]);
        assert_eq!(again, state);
    }

    #[test]
    fn test_select_caps_team_size() {
        let state = select(&LegendaryEventTeams::default(), "Melee", &["A", "B", "C"]);
        let state = select(&state, "Melee", &["D", "E", "F", "G"]);
        assert_eq!(members(&state, "Melee"), vec!["A", "B", "C", "D", "E"]);

        let full = select(&state, "Melee", &["H"]);
        assert_eq!(full, state);
    }

    #[test]
    fn test_teams_are_independent() {
        let state = select(&LegendaryEventTeams::default(), "Melee", &["A"]);
        let state = select(&state, "Ranged", &["A", "B"]);
        assert_eq!(members(&state, "Melee"), vec!["A"]);
        assert_eq!(members(&state, "Ranged"), vec!["A", "B"]);
        assert!(state.team("aun_shi", TrackKey::Beta, "Melee").is_empty());
    }

    #[test]
    fn test_deselect() {
        let state = select(&LegendaryEventTeams::default(), "Melee", &["A", "B", "C"]);
        let state = deselect(&state, "Melee", &["B", "Z"]);
        assert_eq!(members(&state, "Melee"), vec!["A", "C"]);

        let unchanged = deselect(&state, "Missing", &["A"]);
        assert_eq!(unchanged, state);

        let empty = deselect(&state, "Melee", &["A", "C"]);
        assert_eq!(empty, LegendaryEventTeams::default());
    }

    #[test]
    fn test_ordered_team() {
        let mut roster = default_roster();
        roster[0].progress.rank = Rank::Gold1;
        roster[1].progress.rank = Rank::Stone1;
        let first = roster[0].name().to_string();
        let second = roster[1].name().to_string();

        let state = select(
            &LegendaryEventTeams::default(),
            "Mixed",
            &[first.as_str(), "Not a character", second.as_str()],
        );
        let state = teams_reducer(
            &state,
            TeamsAction::SetOrder {
                order_by: TeamOrderKey::Rank,
                direction: SortDirection::Asc,
            },
        );
        let names: Vec<&str> = state
            .ordered_team("aun_shi", TrackKey::Alpha, "Mixed", &roster)
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec![second.as_str(), first.as_str()]);

        let state = teams_reducer(
            &state,
            TeamsAction::SetOrder {
                order_by: TeamOrderKey::Rank,
                direction: SortDirection::Desc,
            },
        );
        let names: Vec<&str> = state
            .ordered_team("aun_shi", TrackKey::Alpha, "Mixed", &roster)
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec![first.as_str(), second.as_str()]);
    }

    #[test]
    fn test_order_parse() {
        assert_eq!("Rarity".parse::<TeamOrderKey>().unwrap(), TeamOrderKey::Rarity);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("power".parse::<TeamOrderKey>().is_err());
    }

    #[test]
    fn test_action_json() {
        let action: TeamsAction = serde_json::from_str(
            r#"{"type":"SetOrder","order_by":"rarity","direction":"desc"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            TeamsAction::SetOrder {
                order_by: TeamOrderKey::Rarity,
                direction: SortDirection::Desc,
            }
        );
    }
}
