//! Legendary events: declarative track definitions and the tracks built from them.
//!
//! Each event is a YAML file under `share/legendary-events/` naming, per
//! track, one exclusion criterion for the base pool and an ordered list of
//! point-valued restrictions. [`build_event`] turns a definition and a
//! roster into a [`LegendaryEvent`]; there is one builder for all events.

mod definition;
mod selections;
mod teams;
mod track;

pub use definition::{EventDefinition, RestrictionDefinition, TrackDefinition, TrackKey};
pub use selections::{selections_reducer, LegendaryEventSelections, SelectionsAction};
pub use teams::{
    teams_reducer, LegendaryEventTeams, SelectedTeamOrder, SortDirection, TeamOrderKey,
    TeamsAction, TrackTeams, SELECTED_TEAM_SIZE,
};
pub use track::{build_event, LegendaryEvent, LegendaryEventTrack, TrackRestriction};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::character::Character;

const BUILTIN_EVENT_FILES: &[(&str, &str)] = &[(
    "aun_shi.yaml",
    include_str!("../../../share/legendary-events/aun_shi.yaml"),
)];

static BUILTIN_DEFINITIONS: Lazy<Vec<EventDefinition>> = Lazy::new(|| {
    BUILTIN_EVENT_FILES
        .iter()
        .filter_map(|(file, yaml)| match EventDefinition::from_yaml(yaml) {
            Ok(def) => Some(def),
            Err(e) => {
                tracing::error!("embedded legendary event {} is invalid: {}", file, e);
                None
            }
        })
        .collect()
});

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Failed to parse event definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown legendary event: {0}")]
    UnknownEvent(String),

    #[error("Unknown track: {0}")]
    UnknownTrack(String),

    #[error("Unknown team order: {0}")]
    UnknownOrder(String),

    #[error("Restriction {restriction} in {event} {track} must be worth at least one point")]
    ZeroPoints {
        event: String,
        track: TrackKey,
        restriction: String,
    },

    #[error("Restriction {restriction} appears twice in {event} {track}")]
    DuplicateRestriction {
        event: String,
        track: TrackKey,
        restriction: String,
    },
}

/// Event definitions shipped with the planner
pub fn builtin_definitions() -> &'static [EventDefinition] {
    &BUILTIN_DEFINITIONS
}

/// Build every shipped event against `roster`
pub fn builtin_events(roster: &[Character]) -> Result<Vec<LegendaryEvent>, EventError> {
    builtin_definitions()
        .iter()
        .map(|def| build_event(def, roster))
        .collect()
}

/// Build one shipped event by id
pub fn builtin_event(id: &str, roster: &[Character]) -> Result<LegendaryEvent, EventError> {
    let definition = builtin_definitions()
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| EventError::UnknownEvent(id.to_string()))?;
    build_event(definition, roster)
}
