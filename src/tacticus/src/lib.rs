//! # tacticus
//!
//! Planner library for Warhammer 40,000: Tacticus.
//!
//! This library provides:
//! - Reference tables for ranks, rarities, stars, factions and traits
//! - The character roster with per-player progression
//! - Composable roster filters
//! - Legendary Event tracks built from declarative event files
//! - Reducers for characters, goals, guild war, event selections and event teams
//! - A store that applies actions and persists personal data
//!
//! ## Example
//!
//! ```
//! use tacticus::{Action, GuildWarAction, MemoryStore, Store};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = Store::load(MemoryStore::new())?;
//! let name = store.state().characters[0].name().to_string();
//!
//! store.dispatch(Action::GuildWar(GuildWarAction::UpdateTeam {
//!     team_id: "offense-1".to_string(),
//!     lineup: vec![name.clone()],
//!     rarity_cap: tacticus::Rarity::Legendary,
//!     team_name: Some("Spearhead".to_string()),
//! }))?;
//! store.dispatch(Action::GuildWar(GuildWarAction::DeployCharacter {
//!     character: name.clone(),
//! }))?;
//!
//! assert!(store.state().guild_war.is_deployed(&name));
//! # Ok(())
//! # }
//! ```

pub mod character;
pub mod filter;
pub mod goals;
pub mod guild_war;
pub mod legendary_event;
pub mod reference;
pub mod store;

#[cfg(feature = "wasm")]
pub mod wasm;

#[doc(inline)]
pub use character::{
    builtin_units, characters_reducer, default_roster, merge_roster, Character, CharacterProgress,
    CharactersAction, PersonalCharacterData, UnitData,
};
#[doc(inline)]
pub use filter::{CharacterFilter, Criterion};
#[doc(inline)]
pub use goals::{goals_reducer, GoalError, GoalsAction, PersonalGoal, PersonalGoalType};
#[doc(inline)]
pub use guild_war::{guild_war_reducer, GuildWar, GuildWarAction, GuildWarTeam, GuildWarTeamType};
#[doc(inline)]
pub use legendary_event::{
    build_event, builtin_definitions, builtin_event, EventDefinition, EventError, LegendaryEvent,
    LegendaryEventSelections, LegendaryEventTeams, SelectionsAction, TeamsAction, TrackKey,
};
#[doc(inline)]
pub use store::{
    global_reducer, Action, FileStore, GlobalState, KeyValueStore, MemoryStore,
    PersonalDataSnapshot, Store, StoreError, ViewPreferences, ViewPreferencesAction,
};

// Reference data (ranks, rarities, stars, factions, traits)
#[doc(inline)]
pub use reference::{
    Alliance, AttackType, CharacterBias, DamageType, Faction, Rank, Rarity, RarityStars,
    ReferenceError, Trait,
};
