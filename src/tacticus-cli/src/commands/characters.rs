//! Character command handlers

use anyhow::{Context, Result};
use tacticus::{
    Action, Character, CharacterBias, CharactersAction, Faction, KeyValueStore, Rank, Rarity,
    RarityStars, Store,
};

use super::resolve_character;

/// Progress fields to change; `None` leaves a field as is
#[derive(Debug, Default)]
pub struct ProgressUpdate {
    pub rank: Option<Rank>,
    pub rarity: Option<Rarity>,
    pub stars: Option<u8>,
    pub shards: Option<u32>,
    pub level: Option<(u32, u32)>,
    pub bias: Option<CharacterBias>,
}

pub fn list<S: KeyValueStore>(
    store: &Store<S>,
    unlocked: bool,
    faction: Option<Faction>,
    json: bool,
) -> Result<()> {
    let characters = select(store.state().characters.as_slice(), unlocked, faction);

    if json {
        println!("{}", serde_json::to_string_pretty(&characters)?);
        return Ok(());
    }

    println!(
        "{:<24} {:<20} {:<10} {:<12} {:<12} {:>5} {:>6}",
        "Name", "Faction", "Rarity", "Stars", "Rank", "Level", "Shards"
    );
    for c in &characters {
        println!(
            "{:<24} {:<20} {:<10} {:<12} {:<12} {:>5} {:>6}",
            c.name(),
            c.unit.faction.to_string(),
            c.rarity().to_string(),
            c.progress.stars.to_string(),
            c.rank().to_string(),
            c.progress.level,
            c.progress.shards
        );
    }
    println!("\n{} characters", characters.len());
    Ok(())
}

fn select(characters: &[Character], unlocked: bool, faction: Option<Faction>) -> Vec<&Character> {
    characters
        .iter()
        .filter(|c| !unlocked || c.is_unlocked())
        .filter(|c| faction.map_or(true, |f| c.unit.faction == f))
        .collect()
}

/// Translate an update into actions. Rarity goes first so the rank and stars
/// given alongside it are clamped against the new rarity.
fn actions(character: &str, update: ProgressUpdate) -> Result<Vec<CharactersAction>> {
    let character = character.to_string();
    let mut actions = Vec::new();

    if let Some(value) = update.rarity {
        actions.push(CharactersAction::UpdateRarity {
            character: character.clone(),
            value,
        });
    }
    if let Some(value) = update.rank {
        actions.push(CharactersAction::UpdateRank {
            character: character.clone(),
            value,
        });
    }
    if let Some(stars) = update.stars {
        let value = RarityStars::try_from(stars).context("Invalid star level")?;
        actions.push(CharactersAction::UpdateStars {
            character: character.clone(),
            value,
        });
    }
    if let Some(value) = update.shards {
        actions.push(CharactersAction::UpdateShards {
            character: character.clone(),
            value,
        });
    }
    if let Some((level, xp)) = update.level {
        actions.push(CharactersAction::UpdateLevel {
            character: character.clone(),
            level,
            xp,
        });
    }
    if let Some(value) = update.bias {
        actions.push(CharactersAction::UpdateBias { character, value });
    }
    Ok(actions)
}

pub fn set<S: KeyValueStore>(store: &mut Store<S>, name: &str, update: ProgressUpdate) -> Result<()> {
    let character = resolve_character(store, name)?;
    let actions = actions(&character, update)?;
    if actions.is_empty() {
        println!("Nothing to change for {}", character);
        return Ok(());
    }

    for action in actions {
        store.dispatch(Action::Characters(action))?;
    }
    print_summary(store, &character);
    Ok(())
}

pub fn reset<S: KeyValueStore>(store: &mut Store<S>, name: &str) -> Result<()> {
    let character = resolve_character(store, name)?;
    store.dispatch(Action::Characters(CharactersAction::Reset {
        character: character.clone(),
    }))?;
    print_summary(store, &character);
    Ok(())
}

fn print_summary<S: KeyValueStore>(store: &Store<S>, name: &str) {
    if let Some(c) = store.state().characters.iter().find(|c| c.name() == name) {
        println!(
            "{}: {} {}, {}, level {}, {} shards",
            c.name(),
            c.rarity(),
            c.progress.stars,
            c.rank(),
            c.progress.level,
            c.progress.shards
        );
    }
}
