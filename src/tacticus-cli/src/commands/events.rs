//! Legendary event command handlers

use anyhow::{bail, Result};
use tacticus::legendary_event::{
    LegendaryEventTrack, SortDirection, TeamOrderKey, TrackKey, SELECTED_TEAM_SIZE,
};
use tacticus::{Action, EventDefinition, KeyValueStore, SelectionsAction, Store, TeamsAction};

use super::resolve_character;

fn definition<'a, S: KeyValueStore>(store: &'a Store<S>, id: &str) -> Result<&'a EventDefinition> {
    match store.definitions().iter().find(|d| d.id == id) {
        Some(def) => Ok(def),
        None => bail!("Unknown legendary event: {} (see `tacticus events list`)", id),
    }
}

pub fn list<S: KeyValueStore>(store: &Store<S>) -> Result<()> {
    for def in store.definitions() {
        let customized: Vec<String> = TrackKey::ALL
            .iter()
            .filter(|&&key| store.state().legendary_events.is_customized(&def.id, key))
            .map(|key| key.to_string())
            .collect();
        if customized.is_empty() {
            println!("{:<16} {}", def.id, def.name);
        } else {
            println!(
                "{:<16} {} (custom: {})",
                def.id,
                def.name,
                customized.join(", ")
            );
        }
    }
    Ok(())
}

pub fn show<S: KeyValueStore>(
    store: &Store<S>,
    id: &str,
    track: Option<TrackKey>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let def = definition(store, id)?;
    let event = store.legendary_event(id)?;

    if json {
        match track {
            Some(key) => println!("{}", serde_json::to_string_pretty(event.track(key))?),
            None => println!("{}", serde_json::to_string_pretty(&event)?),
        }
        return Ok(());
    }

    println!("{}", event.name);
    let keys: Vec<TrackKey> = match track {
        Some(key) => vec![key],
        None => TrackKey::ALL.to_vec(),
    };
    for key in keys {
        let selected = store.state().legendary_events.selected(def, key);
        print_track(event.track(key), &selected, limit);
        print_teams(store, id, key);
    }
    Ok(())
}

fn print_teams<S: KeyValueStore>(store: &Store<S>, id: &str, track: TrackKey) {
    let state = store.state();
    let Some(teams) = state.legendary_event_teams.track_teams(id, track) else {
        return;
    };
    let order = state.legendary_event_teams.order;
    println!("  Teams (by {} {}):", order.order_by, order.direction);
    for name in teams.keys() {
        let members: Vec<&str> = state
            .legendary_event_teams
            .ordered_team(id, track, name, &state.characters)
            .iter()
            .map(|c| c.name())
            .collect();
        println!("    {:<16} {}", name, members.join(", "));
    }
}

fn print_track(track: &LegendaryEventTrack, selected: &[String], limit: usize) {
    println!("\n{} ({} eligible)", track.key, track.eligible.len());
    for r in &track.restrictions {
        let mark = if selected.contains(&r.name) { "x" } else { " " };
        println!(
            "  [{}] {:<20} {:>4} pts  {:>3} characters",
            mark,
            r.name,
            r.points,
            r.units.len()
        );
    }

    println!("  Best characters:");
    for (character, points) in track.ranked_characters(selected).into_iter().take(limit) {
        println!("    {:<24} {:>4}", character.name(), points);
    }
}

pub fn toggle<S: KeyValueStore>(
    store: &mut Store<S>,
    id: &str,
    track: TrackKey,
    restriction: &str,
) -> Result<()> {
    let def = definition(store, id)?;
    let Some(name) = def
        .track(track)
        .restrictions
        .iter()
        .map(|r| r.name.as_str())
        .find(|n| n.eq_ignore_ascii_case(restriction))
        .map(String::from)
    else {
        let known: Vec<&str> = def
            .track(track)
            .restrictions
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        bail!(
            "Unknown restriction {} in {} {} (one of: {})",
            restriction,
            id,
            track,
            known.join(", ")
        );
    };

    store.dispatch(Action::LegendaryEvents(SelectionsAction::ToggleRestriction {
        event_id: id.to_string(),
        track,
        restriction: name.clone(),
    }))?;

    let def = definition(store, id)?;
    let selected = store.state().legendary_events.selected(def, track);
    let state = if selected.contains(&name) {
        "selected"
    } else {
        "deselected"
    };
    println!("{} {}: {} {}", id, track, name, state);
    Ok(())
}

pub fn reset<S: KeyValueStore>(store: &mut Store<S>, id: &str, track: TrackKey) -> Result<()> {
    definition(store, id)?;
    store.dispatch(Action::LegendaryEvents(SelectionsAction::ResetTrack {
        event_id: id.to_string(),
        track,
    }))?;
    println!("{} {}: back to default restrictions", id, track);
    Ok(())
}

fn resolve_all<S: KeyValueStore>(store: &Store<S>, names: &[String]) -> Result<Vec<String>> {
    names.iter().map(|n| resolve_character(store, n)).collect()
}

pub fn pick<S: KeyValueStore>(
    store: &mut Store<S>,
    id: &str,
    track: TrackKey,
    team: &str,
    characters: &[String],
) -> Result<()> {
    definition(store, id)?;
    let characters = resolve_all(store, characters)?;
    let before = store.state().legendary_event_teams.team(id, track, team).len();
    if before >= SELECTED_TEAM_SIZE {
        bail!(
            "{} {} team {} already has {} characters",
            id,
            track,
            team,
            SELECTED_TEAM_SIZE
        );
    }

    store.dispatch(Action::LegendaryEventTeams(TeamsAction::SelectCharacters {
        event_id: id.to_string(),
        track,
        team: team.to_string(),
        characters: characters.clone(),
    }))?;

    let members = store.state().legendary_event_teams.team(id, track, team);
    let skipped = characters.iter().filter(|c| !members.contains(*c)).count();
    if skipped > 0 {
        tracing::warn!("team {} is full, skipped {} characters", team, skipped);
    }
    println!("{} {} {}: {}", id, track, team, members.join(", "));
    Ok(())
}

pub fn unpick<S: KeyValueStore>(
    store: &mut Store<S>,
    id: &str,
    track: TrackKey,
    team: &str,
    characters: &[String],
) -> Result<()> {
    definition(store, id)?;
    let characters = resolve_all(store, characters)?;
    store.dispatch(Action::LegendaryEventTeams(TeamsAction::DeselectCharacters {
        event_id: id.to_string(),
        track,
        team: team.to_string(),
        characters,
    }))?;

    let members = store.state().legendary_event_teams.team(id, track, team);
    if members.is_empty() {
        println!("{} {} {}: empty", id, track, team);
    } else {
        println!("{} {} {}: {}", id, track, team, members.join(", "));
    }
    Ok(())
}

pub fn order<S: KeyValueStore>(
    store: &mut Store<S>,
    order_by: TeamOrderKey,
    direction: SortDirection,
) -> Result<()> {
    store.dispatch(Action::LegendaryEventTeams(TeamsAction::SetOrder {
        order_by,
        direction,
    }))?;
    println!("Selected teams ordered by {} {}", order_by, direction);
    Ok(())
}
