//! Global planner state and its persistence.
//!
//! [`GlobalState`] gathers every slice the player edits. [`global_reducer`]
//! routes an [`Action`] to the slice it names. [`Store`] owns the state,
//! applies actions and writes the result to a [`KeyValueStore`] after each
//! change. A failed write is logged and never undoes the change.

mod backup;
mod kv;
mod snapshot;

pub use backup::{backup_paths, BackupError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{PersonalDataSnapshot, SNAPSHOT_VERSION};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::{builtin_units, characters_reducer, Character, CharactersAction, UnitData};
use crate::goals::{goals_reducer, GoalsAction, PersonalGoal, GOALS_LIMIT};
use crate::guild_war::{guild_war_reducer, GuildWar, GuildWarAction};
use crate::legendary_event::{
    build_event, builtin_definitions, selections_reducer, teams_reducer, EventDefinition,
    EventError, LegendaryEvent, LegendaryEventSelections, LegendaryEventTeams, SelectionsAction,
    TeamsAction,
};

/// Storage key holding the personal data snapshot
pub const PERSONAL_DATA_KEY: &str = "personal-data";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backup failed: {0}")]
    Backup(#[from] BackupError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("Snapshot version {0} is newer than this planner supports")]
    UnsupportedVersion(u32),

    #[error("Goal limit reached ({limit} goals)")]
    GoalLimitReached { limit: usize },
}

/// Display toggles for roster views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPreferences {
    pub only_unlocked: bool,
    pub fit_to_screen: bool,
    pub used_in_campaigns: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewSetting {
    OnlyUnlocked,
    FitToScreen,
    UsedInCampaigns,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewPreferencesAction {
    Update { setting: ViewSetting, value: bool },
}

pub fn view_preferences_reducer(
    state: &ViewPreferences,
    action: ViewPreferencesAction,
) -> ViewPreferences {
    match action {
        ViewPreferencesAction::Update { setting, value } => {
            let mut next = *state;
            match setting {
                ViewSetting::OnlyUnlocked => next.only_unlocked = value,
                ViewSetting::FitToScreen => next.fit_to_screen = value,
                ViewSetting::UsedInCampaigns => next.used_in_campaigns = value,
            }
            next
        }
    }
}

/// Everything the player edits in one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalState {
    pub characters: Vec<Character>,
    pub goals: Vec<PersonalGoal>,
    pub guild_war: GuildWar,
    pub view_preferences: ViewPreferences,
    pub legendary_events: LegendaryEventSelections,
    pub legendary_event_teams: LegendaryEventTeams,
}

impl Default for GlobalState {
    fn default() -> Self {
        PersonalDataSnapshot::default().into_state(builtin_units())
    }
}

/// An action addressed to one slice of [`GlobalState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "slice", content = "action", rename_all = "camelCase")]
pub enum Action {
    Characters(CharactersAction),
    Goals(GoalsAction),
    GuildWar(GuildWarAction),
    ViewPreferences(ViewPreferencesAction),
    LegendaryEvents(SelectionsAction),
    LegendaryEventTeams(TeamsAction),
}

impl Action {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Route `action` to its slice; the other slices are carried over as is.
pub fn global_reducer(
    state: &GlobalState,
    action: Action,
    definitions: &[EventDefinition],
) -> GlobalState {
    match action {
        Action::Characters(action) => GlobalState {
            characters: characters_reducer(&state.characters, action),
            ..state.clone()
        },
        Action::Goals(action) => GlobalState {
            goals: goals_reducer(&state.goals, action),
            ..state.clone()
        },
        Action::GuildWar(action) => GlobalState {
            guild_war: guild_war_reducer(&state.guild_war, action),
            ..state.clone()
        },
        Action::ViewPreferences(action) => GlobalState {
            view_preferences: view_preferences_reducer(&state.view_preferences, action),
            ..state.clone()
        },
        Action::LegendaryEvents(action) => GlobalState {
            legendary_events: selections_reducer(&state.legendary_events, action, definitions),
            ..state.clone()
        },
        Action::LegendaryEventTeams(action) => GlobalState {
            legendary_event_teams: teams_reducer(&state.legendary_event_teams, action),
            ..state.clone()
        },
    }
}

/// Owns the planner state and keeps storage in step with it
pub struct Store<S: KeyValueStore> {
    storage: S,
    units: Vec<UnitData>,
    definitions: Vec<EventDefinition>,
    state: GlobalState,
}

impl<S: KeyValueStore> Store<S> {
    /// Load personal data from `storage` against the shipped units and events.
    ///
    /// Empty storage yields the default state.
    pub fn load(storage: S) -> Result<Self, StoreError> {
        Self::load_with(
            storage,
            builtin_units().to_vec(),
            builtin_definitions().to_vec(),
        )
    }

    pub fn load_with(
        storage: S,
        units: Vec<UnitData>,
        definitions: Vec<EventDefinition>,
    ) -> Result<Self, StoreError> {
        let snapshot = match storage.get(PERSONAL_DATA_KEY)? {
            Some(json) => {
                let snapshot = PersonalDataSnapshot::from_json(&json)?;
                if snapshot.goals.len() > GOALS_LIMIT {
                    return Err(StoreError::GoalLimitReached { limit: GOALS_LIMIT });
                }
                tracing::info!(
                    "loaded personal data: {} goals, {} characters with progress",
                    snapshot.goals.len(),
                    snapshot.characters.len()
                );
                snapshot
            }
            None => {
                tracing::debug!("no personal data stored, starting fresh");
                PersonalDataSnapshot::default()
            }
        };
        let state = snapshot.into_state(&units);
        Ok(Store {
            storage,
            units,
            definitions,
            state,
        })
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn definitions(&self) -> &[EventDefinition] {
        &self.definitions
    }

    pub fn snapshot(&self) -> PersonalDataSnapshot {
        PersonalDataSnapshot::from(&self.state)
    }

    /// Apply `action` and persist the new state.
    ///
    /// Only the goal limit can reject an action. Persistence failures are
    /// logged and the new state is kept.
    pub fn dispatch(&mut self, action: Action) -> Result<&GlobalState, StoreError> {
        self.check_goal_limit(&action)?;
        self.state = global_reducer(&self.state, action, &self.definitions);
        if let Err(e) = self.save() {
            tracing::warn!("failed to persist personal data: {}", e);
        }
        Ok(&self.state)
    }

    /// Parse a JSON action and dispatch it
    pub fn dispatch_json(&mut self, json: &str) -> Result<&GlobalState, StoreError> {
        let action = Action::from_json(json)?;
        self.dispatch(action)
    }

    /// Replace all personal data with `snapshot`
    pub fn import(&mut self, snapshot: PersonalDataSnapshot) -> Result<&GlobalState, StoreError> {
        if snapshot.goals.len() > GOALS_LIMIT {
            return Err(StoreError::GoalLimitReached { limit: GOALS_LIMIT });
        }
        self.state = snapshot.into_state(&self.units);
        self.save()?;
        Ok(&self.state)
    }

    /// Write the current state to storage
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = self.snapshot().to_json()?;
        self.storage.set(PERSONAL_DATA_KEY, &json)
    }

    /// Build a legendary event against the current roster
    pub fn legendary_event(&self, id: &str) -> Result<LegendaryEvent, StoreError> {
        let definition = self
            .definitions
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| EventError::UnknownEvent(id.to_string()))?;
        Ok(build_event(definition, &self.state.characters)?)
    }

    fn check_goal_limit(&self, action: &Action) -> Result<(), StoreError> {
        let over = match action {
            Action::Goals(GoalsAction::Add { goal }) => {
                self.state.goals.len() >= GOALS_LIMIT
                    && !self.state.goals.iter().any(|g| g.id == goal.id)
            }
            Action::Goals(GoalsAction::Set { value: Some(goals) }) => goals.len() > GOALS_LIMIT,
            _ => false,
        };
        if over {
            return Err(StoreError::GoalLimitReached { limit: GOALS_LIMIT });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::PersonalGoalType;
    use crate::legendary_event::TrackKey;
    use crate::reference::Rank;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only").into())
        }
    }

    fn first_character(store: &Store<impl KeyValueStore>) -> String {
        store.state().characters[0].name().to_string()
    }

    fn add_goal(character: &str) -> Action {
        Action::Goals(GoalsAction::Add {
            goal: PersonalGoal::new(character, PersonalGoalType::UpgradeRank, 1)
                .with_target_rank(Rank::Gold1),
        })
    }

    #[test]
    fn test_load_empty_is_default() {
        let store = Store::load(MemoryStore::new()).unwrap();
        assert_eq!(store.state(), &GlobalState::default());
        assert_eq!(store.state().characters.len(), builtin_units().len());
    }

    #[test]
    fn test_dispatch_persists() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let name = first_character(&store);
        store
            .dispatch(Action::GuildWar(GuildWarAction::DeployCharacter {
                character: name.clone(),
            }))
            .unwrap();

        let reloaded = Store::load(store.storage().clone()).unwrap();
        assert!(reloaded.state().guild_war.is_deployed(&name));
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn test_dispatch_only_touches_one_slice() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let before = store.state().clone();
        store
            .dispatch(Action::ViewPreferences(ViewPreferencesAction::Update {
                setting: ViewSetting::FitToScreen,
                value: true,
            }))
            .unwrap();

        let after = store.state();
        assert!(after.view_preferences.fit_to_screen);
        assert!(!after.view_preferences.only_unlocked);
        assert_eq!(after.guild_war, before.guild_war);
        assert_eq!(after.characters, before.characters);
    }

    #[test]
    fn test_goal_limit() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let name = first_character(&store);
        for _ in 0..GOALS_LIMIT {
            store.dispatch(add_goal(&name)).unwrap();
        }
        let result = store.dispatch(add_goal(&name));
        assert!(matches!(
            result,
            Err(StoreError::GoalLimitReached { limit: GOALS_LIMIT })
        ));
        assert_eq!(store.state().goals.len(), GOALS_LIMIT);

        // re-adding a known goal updates it in place
        let mut known = store.state().goals[0].clone();
        known.priority = GOALS_LIMIT as u32;
        store
            .dispatch(Action::Goals(GoalsAction::Add { goal: known.clone() }))
            .unwrap();
        assert_eq!(store.state().goals.len(), GOALS_LIMIT);
        assert_eq!(store.state().goals[GOALS_LIMIT - 1].id, known.id);
    }

    #[test]
    fn test_persist_failure_keeps_state() {
        let mut store = Store::load(FailingStore).unwrap();
        let name = first_character(&store);
        store.dispatch(add_goal(&name)).unwrap();
        assert_eq!(store.state().goals.len(), 1);
        assert!(store.save().is_err());
    }

    #[test]
    fn test_dispatch_json() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        store
            .dispatch_json(r#"{"slice":"guildWar","action":{"type":"UpdateBfLevel","battlefieldLevel":3}}"#)
            .unwrap();
        assert_eq!(store.state().guild_war.battlefield_level, 3);
    }

    #[test]
    fn test_unknown_action_leaves_state() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let before = store.state().clone();
        let result =
            store.dispatch_json(r#"{"slice":"guildWar","action":{"type":"Explode"}}"#);
        assert!(matches!(result, Err(StoreError::Json(_))));
        assert_eq!(store.state(), &before);
        assert_eq!(store.storage().get(PERSONAL_DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_storage_is_an_error() {
        let mut storage = MemoryStore::new();
        storage.set(PERSONAL_DATA_KEY, "not json").unwrap();
        assert!(matches!(Store::load(storage), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_legendary_event_uses_selections() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let definition = store.definitions()[0].clone();
        let restriction = definition.alpha.restrictions[0].name.clone();
        store
            .dispatch(Action::LegendaryEvents(SelectionsAction::ToggleRestriction {
                event_id: definition.id.clone(),
                track: TrackKey::Alpha,
                restriction: restriction.clone(),
            }))
            .unwrap();

        let selected = store
            .state()
            .legendary_events
            .selected(&definition, TrackKey::Alpha);
        assert_eq!(
            selected.contains(&restriction),
            !definition.alpha.restrictions[0].selected
        );
        assert!(store.legendary_event(&definition.id).is_ok());
        assert!(matches!(
            store.legendary_event("missing"),
            Err(StoreError::Event(EventError::UnknownEvent(_)))
        ));
    }

    #[test]
    fn test_import_normalizes_goals() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let name = first_character(&store);
        let mut noted = PersonalGoal::new(&name, PersonalGoalType::Unlock, 5);
        noted.notes = Some("n".repeat(500));
        let snapshot = PersonalDataSnapshot {
            goals: vec![noted, PersonalGoal::new(&name, PersonalGoalType::Unlock, 5)],
            ..Default::default()
        };

        store.import(snapshot).unwrap();
        let priorities: Vec<u32> = store.state().goals.iter().map(|g| g.priority).collect();
        assert_eq!(priorities, vec![1, 2]);
        assert_eq!(
            store.state().goals[0].notes.as_deref().map(|n| n.chars().count()),
            Some(crate::goals::NOTES_MAX_LEN)
        );
    }

    #[test]
    fn test_stored_goals_over_limit_rejected() {
        let goals = (0..GOALS_LIMIT + 5)
            .map(|i| PersonalGoal::new("Ragnar", PersonalGoalType::Unlock, i as u32 + 1))
            .collect();
        let snapshot = PersonalDataSnapshot {
            goals,
            ..Default::default()
        };
        let mut storage = MemoryStore::new();
        storage
            .set(PERSONAL_DATA_KEY, &snapshot.to_json().unwrap())
            .unwrap();

        assert!(matches!(
            Store::load(storage),
            Err(StoreError::GoalLimitReached { limit: GOALS_LIMIT })
        ));
    }

    #[test]
    fn test_selected_teams_persist() {
        let mut store = Store::load(MemoryStore::new()).unwrap();
        let name = first_character(&store);
        store
            .dispatch_json(&format!(
                r#"{{"slice":"legendaryEventTeams","action":{{"type":"SelectCharacters","event_id":"aun_shi","track":"beta","team":"Core","characters":["{}"]}}}}"#,
                name
            ))
            .unwrap();

        let reloaded = Store::load(store.storage().clone()).unwrap();
        assert_eq!(
            reloaded
                .state()
                .legendary_event_teams
                .team("aun_shi", TrackKey::Beta, "Core"),
            &[name][..]
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(FileStore::new(dir.path())).unwrap();
        let name = first_character(&store);
        store.dispatch(add_goal(&name)).unwrap();
        store.dispatch(add_goal(&name)).unwrap();

        let reloaded = Store::load(FileStore::new(dir.path())).unwrap();
        assert_eq!(reloaded.state().goals, store.state().goals);
        assert!(dir.path().join("personal-data.json.bak").exists());
    }
}
