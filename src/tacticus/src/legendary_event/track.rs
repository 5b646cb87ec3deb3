//! Built legendary event tracks

use serde::Serialize;

use super::definition::{EventDefinition, TrackDefinition, TrackKey};
use super::EventError;
use crate::character::Character;
use crate::filter;

/// A restriction with the characters from the track's pool that satisfy it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRestriction {
    pub name: String,
    pub points: u32,
    pub units: Vec<Character>,
    pub selected: bool,
}

impl TrackRestriction {
    pub fn contains(&self, character: &str) -> bool {
        self.units.iter().any(|c| c.name() == character)
    }
}

/// One track of a legendary event, built against a roster.
///
/// Every restriction's `units` is a subset of `eligible`, which is a subset
/// of the roster the track was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendaryEventTrack {
    pub event_id: String,
    pub key: TrackKey,
    pub eligible: Vec<Character>,
    pub restrictions: Vec<TrackRestriction>,
    pub metadata: serde_json::Value,
}

impl LegendaryEventTrack {
    fn build(event_id: &str, key: TrackKey, def: &TrackDefinition, roster: &[Character]) -> Self {
        let eligible = filter::apply(roster, def.exclude, true);
        let restrictions = def
            .restrictions
            .iter()
            .map(|r| TrackRestriction {
                name: r.name.clone(),
                points: r.points,
                units: filter::apply(&eligible, r.criterion, r.exclude),
                selected: r.selected,
            })
            .collect();

        LegendaryEventTrack {
            event_id: event_id.to_string(),
            key,
            eligible,
            restrictions,
            metadata: def.metadata.clone(),
        }
    }

    pub fn restriction(&self, name: &str) -> Option<&TrackRestriction> {
        self.restrictions.iter().find(|r| r.name == name)
    }

    pub fn default_selection(&self) -> Vec<String> {
        self.restrictions
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.name.clone())
            .collect()
    }

    /// Points a character earns in this track with the given restrictions
    /// selected. Zero for characters outside the track.
    pub fn character_points(&self, character: &str, selected: &[String]) -> u32 {
        self.restrictions
            .iter()
            .filter(|r| selected.contains(&r.name) && r.contains(character))
            .map(|r| r.points)
            .sum()
    }

    /// Eligible characters ordered by points, highest first (stable for ties)
    pub fn ranked_characters(&self, selected: &[String]) -> Vec<(&Character, u32)> {
        let mut ranked: Vec<(&Character, u32)> = self
            .eligible
            .iter()
            .map(|c| (c, self.character_points(c.name(), selected)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// A legendary event with its three tracks built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendaryEvent {
    pub id: String,
    pub name: String,
    pub alpha: LegendaryEventTrack,
    pub beta: LegendaryEventTrack,
    pub gamma: LegendaryEventTrack,
}

impl LegendaryEvent {
    pub fn track(&self, key: TrackKey) -> &LegendaryEventTrack {
        match key {
            TrackKey::Alpha => &self.alpha,
            TrackKey::Beta => &self.beta,
            TrackKey::Gamma => &self.gamma,
        }
    }

    pub fn tracks(&self) -> [&LegendaryEventTrack; 3] {
        [&self.alpha, &self.beta, &self.gamma]
    }
}

/// Build every track of an event from its definition.
pub fn build_event(
    definition: &EventDefinition,
    roster: &[Character],
) -> Result<LegendaryEvent, EventError> {
    definition.validate()?;

    let build = |key| {
        LegendaryEventTrack::build(&definition.id, key, definition.track(key), roster)
    };

    Ok(LegendaryEvent {
        id: definition.id.clone(),
        name: definition.name.clone(),
        alpha: build(TrackKey::Alpha),
        beta: build(TrackKey::Beta),
        gamma: build(TrackKey::Gamma),
    })
}
