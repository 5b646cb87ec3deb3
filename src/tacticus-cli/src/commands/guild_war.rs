//! Guild war command handlers

use anyhow::{bail, Result};
use tacticus::guild_war::{ZoneId, BATTLEFIELD_LEVELS, LINEUP_SIZE};
use tacticus::{Action, GuildWar, GuildWarAction, GuildWarTeamType, KeyValueStore, Rarity, Store};

use super::resolve_character;

fn dispatch<S: KeyValueStore>(store: &mut Store<S>, action: GuildWarAction) -> Result<()> {
    store.dispatch(Action::GuildWar(action))?;
    Ok(())
}

pub fn show<S: KeyValueStore>(store: &Store<S>, json: bool) -> Result<()> {
    let gw = &store.state().guild_war;

    if json {
        println!("{}", serde_json::to_string_pretty(gw)?);
        return Ok(());
    }

    println!(
        "Battlefield level {}, zone difficulty {}, section {}",
        gw.battlefield_level, gw.zone_difficulty, gw.section_id
    );
    for team_type in [GuildWarTeamType::Defense, GuildWarTeamType::Offense] {
        println!("\n{} teams:", team_type);
        for team in gw.teams_of(team_type) {
            let lineup = if team.lineup.is_empty() {
                "-".to_string()
            } else {
                team.lineup.join(", ")
            };
            println!(
                "  {:<12} {:<26} {:<10} {}",
                team.id,
                team.name,
                team.rarity_cap.to_string(),
                lineup
            );
        }
    }

    print_deployment(gw);
    Ok(())
}

fn print_deployment(gw: &GuildWar) {
    println!("\nDeployed: {}", list_or_dash(&gw.deployed_characters));
    let available: Vec<String> = gw
        .available_offense()
        .into_iter()
        .map(String::from)
        .collect();
    println!("Available: {}", list_or_dash(&available));
}

fn list_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

pub fn team<S: KeyValueStore>(
    store: &mut Store<S>,
    team_id: &str,
    characters: &[String],
    cap: Rarity,
    name: Option<String>,
) -> Result<()> {
    if store.state().guild_war.team(team_id).is_none() {
        bail!("Unknown team: {}", team_id);
    }
    if characters.len() > LINEUP_SIZE {
        bail!("A team holds at most {} characters", LINEUP_SIZE);
    }

    let mut lineup = Vec::with_capacity(characters.len());
    for name in characters {
        let resolved = resolve_character(store, name)?;
        let rarity = store
            .state()
            .characters
            .iter()
            .find(|c| c.name() == resolved)
            .map(|c| c.rarity());
        if rarity.is_some_and(|r| r > cap) {
            bail!("{} is above the {} cap of {}", resolved, cap, team_id);
        }
        lineup.push(resolved);
    }

    dispatch(
        store,
        GuildWarAction::UpdateTeam {
            team_id: team_id.to_string(),
            lineup,
            rarity_cap: cap,
            team_name: name,
        },
    )?;

    if let Some(team) = store.state().guild_war.team(team_id) {
        println!("{} ({}): {}", team.name, team.id, list_or_dash(&team.lineup));
    }
    Ok(())
}

pub fn clear_team<S: KeyValueStore>(store: &mut Store<S>, team_id: &str) -> Result<()> {
    if store.state().guild_war.team(team_id).is_none() {
        bail!("Unknown team: {}", team_id);
    }
    dispatch(
        store,
        GuildWarAction::ClearTeamLineup {
            team_id: team_id.to_string(),
        },
    )?;
    println!("Cleared {}", team_id);
    Ok(())
}

pub fn caps<S: KeyValueStore>(store: &mut Store<S>, caps: Vec<Rarity>) -> Result<()> {
    let defense = store
        .state()
        .guild_war
        .teams_of(GuildWarTeamType::Defense)
        .count();
    if caps.len() > defense {
        bail!("There are only {} defense teams", defense);
    }
    dispatch(store, GuildWarAction::UpdateDefenseRarityCaps { rarity_caps: caps })
}

fn check_level(level: u8) -> Result<()> {
    if !BATTLEFIELD_LEVELS.contains(&level) {
        bail!(
            "Battlefield level must be between {} and {}",
            BATTLEFIELD_LEVELS.start(),
            BATTLEFIELD_LEVELS.end()
        );
    }
    Ok(())
}

pub fn bf_level<S: KeyValueStore>(store: &mut Store<S>, level: u8) -> Result<()> {
    check_level(level)?;
    dispatch(
        store,
        GuildWarAction::UpdateBfLevel {
            battlefield_level: level,
        },
    )
}

pub fn zone_difficulty<S: KeyValueStore>(store: &mut Store<S>, difficulty: u8) -> Result<()> {
    dispatch(
        store,
        GuildWarAction::UpdateZoneDifficulty {
            zone_difficulty: difficulty,
        },
    )
}

pub fn section<S: KeyValueStore>(store: &mut Store<S>, section: &str) -> Result<()> {
    let zone: ZoneId = section.parse()?;
    dispatch(
        store,
        GuildWarAction::UpdateBfSection {
            section_id: zone.name().to_string(),
        },
    )
}

pub fn layout_bf<S: KeyValueStore>(store: &mut Store<S>, layout_id: &str, level: u8) -> Result<()> {
    check_level(level)?;
    if store.state().guild_war.layout(layout_id).is_none() {
        bail!("Unknown layout: {}", layout_id);
    }
    dispatch(
        store,
        GuildWarAction::UpdateLayoutBfLevel {
            layout_id: layout_id.to_string(),
            bf_level: level,
        },
    )
}

pub fn swap_zones<S: KeyValueStore>(
    store: &mut Store<S>,
    layout_id: &str,
    first: usize,
    second: usize,
) -> Result<()> {
    let Some(layout) = store.state().guild_war.layout(layout_id) else {
        bail!("Unknown layout: {}", layout_id);
    };
    let zones = layout.zones.len();
    if first >= zones || second >= zones {
        bail!("Zone positions run from 0 to {}", zones.saturating_sub(1));
    }
    dispatch(
        store,
        GuildWarAction::SwapLayoutZones {
            layout_id: layout_id.to_string(),
            zone1_index: first,
            zone2_index: second,
        },
    )?;

    if let Some(layout) = store.state().guild_war.layout(layout_id) {
        let order: Vec<&str> = layout.zones.iter().map(|z| z.id.name()).collect();
        println!("{}: {}", layout.name, order.join(", "));
    }
    Ok(())
}

pub fn deploy<S: KeyValueStore>(store: &mut Store<S>, characters: &[String]) -> Result<()> {
    for name in characters {
        let character = resolve_character(store, name)?;
        dispatch(store, GuildWarAction::DeployCharacter { character })?;
    }
    print_deployment(&store.state().guild_war);
    Ok(())
}

pub fn withdraw<S: KeyValueStore>(store: &mut Store<S>, characters: &[String]) -> Result<()> {
    for name in characters {
        let character = resolve_character(store, name)?;
        dispatch(store, GuildWarAction::WithdrawCharacter { character })?;
    }
    print_deployment(&store.state().guild_war);
    Ok(())
}

pub fn clear_deployed<S: KeyValueStore>(store: &mut Store<S>) -> Result<()> {
    dispatch(store, GuildWarAction::ClearDeployedCharacters)?;
    println!("All characters withdrawn");
    Ok(())
}

pub fn reset<S: KeyValueStore>(store: &mut Store<S>) -> Result<()> {
    dispatch(store, GuildWarAction::Set { value: None })?;
    println!("Guild war reset to defaults");
    Ok(())
}
