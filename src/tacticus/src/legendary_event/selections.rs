//! Player restriction choices per legendary event track

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::definition::{EventDefinition, TrackKey};

/// Selected restriction names, by event id then track.
///
/// A track with no entry uses the restrictions its definition pre-selects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegendaryEventSelections(BTreeMap<String, BTreeMap<TrackKey, Vec<String>>>);

impl LegendaryEventSelections {
    /// Restrictions selected for a track, falling back to the defaults
    pub fn selected(&self, definition: &EventDefinition, track: TrackKey) -> Vec<String> {
        self.0
            .get(&definition.id)
            .and_then(|tracks| tracks.get(&track))
            .cloned()
            .unwrap_or_else(|| definition.track(track).default_selection())
    }

    /// Whether the player has changed anything on this track
    pub fn is_customized(&self, event_id: &str, track: TrackKey) -> bool {
        self.0
            .get(event_id)
            .is_some_and(|tracks| tracks.contains_key(&track))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SelectionsAction {
    Set {
        #[serde(default)]
        value: Option<LegendaryEventSelections>,
    },
    ToggleRestriction {
        event_id: String,
        track: TrackKey,
        restriction: String,
    },
    ResetTrack {
        event_id: String,
        track: TrackKey,
    },
}

/// Apply `action`, resolving defaults against `definitions`.
pub fn selections_reducer(
    state: &LegendaryEventSelections,
    action: SelectionsAction,
    definitions: &[EventDefinition],
) -> LegendaryEventSelections {
    match action {
        SelectionsAction::Set { value } => value.unwrap_or_default(),
        SelectionsAction::ToggleRestriction {
            event_id,
            track,
            restriction,
        } => {
            let Some(definition) = definitions.iter().find(|d| d.id == event_id) else {
                tracing::debug!("legendary event {} not found", event_id);
                return state.clone();
            };
            if !definition.track(track).has_restriction(&restriction) {
                tracing::debug!(
                    "restriction {} not found in {} {}",
                    restriction,
                    event_id,
                    track
                );
                return state.clone();
            }

            let mut selected = state.selected(definition, track);
            match selected.iter().position(|r| *r == restriction) {
                Some(index) => {
                    selected.remove(index);
                }
                None => selected.push(restriction),
            }

            let mut next = state.clone();
            next.0.entry(event_id).or_default().insert(track, selected);
            next
        }
        SelectionsAction::ResetTrack { event_id, track } => {
            if !state.is_customized(&event_id, track) {
                return state.clone();
            }
            let mut next = state.clone();
            if let Some(tracks) = next.0.get_mut(&event_id) {
                tracks.remove(&track);
                if tracks.is_empty() {
                    next.0.remove(&event_id);
                }
            }
            next
        }
    }
}
