//! Declarative legendary event configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EventError;
use crate::filter::Criterion;

/// One of the three parallel tracks of a legendary event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKey {
    Alpha,
    Beta,
    Gamma,
}

impl TrackKey {
    pub const ALL: [TrackKey; 3] = [TrackKey::Alpha, TrackKey::Beta, TrackKey::Gamma];

    pub fn name(self) -> &'static str {
        match self {
            TrackKey::Alpha => "alpha",
            TrackKey::Beta => "beta",
            TrackKey::Gamma => "gamma",
        }
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrackKey {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackKey::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EventError::UnknownTrack(s.to_string()))
    }
}

/// A point-valued restriction as authored in the event file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictionDefinition {
    pub name: String,
    pub points: u32,
    pub criterion: Criterion,
    #[serde(default)]
    pub exclude: bool,
    /// Pre-selected when the player has not chosen yet
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDefinition {
    /// Characters matching this criterion cannot enter the track
    pub exclude: Criterion,
    pub restrictions: Vec<RestrictionDefinition>,
    /// Display-only data (enemy info, battle points, ...)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl TrackDefinition {
    /// Names of the restrictions selected by default
    pub fn default_selection(&self) -> Vec<String> {
        self.restrictions
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn has_restriction(&self, name: &str) -> bool {
        self.restrictions.iter().any(|r| r.name == name)
    }
}

/// Full configuration of one legendary event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub id: String,
    pub name: String,
    pub alpha: TrackDefinition,
    pub beta: TrackDefinition,
    pub gamma: TrackDefinition,
}

impl EventDefinition {
    /// Parse an event definition from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, EventError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn track(&self, key: TrackKey) -> &TrackDefinition {
        match key {
            TrackKey::Alpha => &self.alpha,
            TrackKey::Beta => &self.beta,
            TrackKey::Gamma => &self.gamma,
        }
    }

    /// Check the authoring rules: positive points and unique restriction
    /// names within each track.
    pub fn validate(&self) -> Result<(), EventError> {
        for key in TrackKey::ALL {
            let track = self.track(key);
            for (i, restriction) in track.restrictions.iter().enumerate() {
                if restriction.points == 0 {
                    return Err(EventError::ZeroPoints {
                        event: self.id.clone(),
                        track: key,
                        restriction: restriction.name.clone(),
                    });
                }
                if track.restrictions[..i]
                    .iter()
                    .any(|r| r.name == restriction.name)
                {
                    return Err(EventError::DuplicateRestriction {
                        event: self.id.clone(),
                        track: key,
                        restriction: restriction.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
