//! WebAssembly bindings for the planner
//!
//! State crosses the boundary as JSON strings. Persisting the snapshot
//! (browser local storage or otherwise) is left to the JavaScript side.

use crate::filter::{self, Criterion};
use crate::legendary_event::TrackKey;
use crate::store::{MemoryStore, PersonalDataSnapshot, Store};
use wasm_bindgen::prelude::*;

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Planner state driven by JSON actions
#[wasm_bindgen]
pub struct Planner {
    inner: Store<MemoryStore>,
}

#[wasm_bindgen]
impl Planner {
    /// Start from a stored snapshot, or from defaults when none is given
    #[wasm_bindgen(constructor)]
    pub fn new(snapshot: Option<String>) -> Result<Planner, JsValue> {
        let mut inner =
            Store::load(MemoryStore::new()).map_err(|e| js_error("Load failed", e))?;
        if let Some(json) = snapshot {
            let snapshot = PersonalDataSnapshot::from_json(&json)
                .map_err(|e| js_error("Invalid snapshot", e))?;
            inner
                .import(snapshot)
                .map_err(|e| js_error("Import failed", e))?;
        }
        Ok(Planner { inner })
    }

    /// Apply one action, e.g. `{"slice":"guildWar","action":{"type":"ClearDeployedCharacters"}}`
    #[wasm_bindgen(js_name = dispatch)]
    pub fn dispatch(&mut self, action: &str) -> Result<(), JsValue> {
        self.inner
            .dispatch_json(action)
            .map(|_| ())
            .map_err(|e| js_error("Dispatch failed", e))
    }

    /// Personal data as JSON, ready to persist
    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.inner
            .snapshot()
            .to_json()
            .map_err(|e| js_error("Serialize failed", e))
    }

    #[wasm_bindgen(js_name = guildWar)]
    pub fn guild_war(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.state().guild_war)
            .map_err(|e| js_error("Serialize failed", e))
    }

    #[wasm_bindgen(js_name = goals)]
    pub fn goals(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.state().goals)
            .map_err(|e| js_error("Serialize failed", e))
    }

    /// Offense characters not yet deployed
    #[wasm_bindgen(js_name = availableOffense)]
    pub fn available_offense(&self) -> js_sys::Array {
        self.inner
            .state()
            .guild_war
            .available_offense()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// A legendary event with its tracks built against the current roster
    #[wasm_bindgen(js_name = legendaryEvent)]
    pub fn legendary_event(&self, id: &str) -> Result<String, JsValue> {
        let event = self
            .inner
            .legendary_event(id)
            .map_err(|e| js_error("Event failed", e))?;
        serde_json::to_string(&event).map_err(|e| js_error("Serialize failed", e))
    }

    /// Members of a selected event team, sorted by the chosen display order
    #[wasm_bindgen(js_name = selectedTeam)]
    pub fn selected_team(
        &self,
        event_id: &str,
        track: &str,
        team: &str,
    ) -> Result<String, JsValue> {
        let track: TrackKey = track.parse().map_err(|e| js_error("Invalid track", e))?;
        let state = self.inner.state();
        let members = state
            .legendary_event_teams
            .ordered_team(event_id, track, team, &state.characters);
        serde_json::to_string(&members).map_err(|e| js_error("Serialize failed", e))
    }

    /// Roster filtered by a criterion such as `{"by":"faction","value":"Orks"}`
    #[wasm_bindgen(js_name = filterCharacters)]
    pub fn filter_characters(&self, criterion: &str, exclude: bool) -> Result<String, JsValue> {
        let criterion: Criterion =
            serde_json::from_str(criterion).map_err(|e| js_error("Invalid criterion", e))?;
        let characters = filter::apply(&self.inner.state().characters, criterion, exclude);
        serde_json::to_string(&characters).map_err(|e| js_error("Serialize failed", e))
    }
}
