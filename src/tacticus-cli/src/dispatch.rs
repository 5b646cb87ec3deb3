//! Command dispatch functions
//!
//! Breaks up the main match statement into focused dispatch functions.

use anyhow::Result;
use tacticus::{KeyValueStore, Store};

use crate::cli::*;
use crate::commands;
use crate::commands::characters::ProgressUpdate;
use crate::commands::goals::GoalRequest;

/// Dispatch character subcommands
pub fn dispatch_characters<S: KeyValueStore>(
    store: &mut Store<S>,
    command: CharactersCommand,
) -> Result<()> {
    match command {
        CharactersCommand::List {
            unlocked,
            faction,
            json,
        } => commands::characters::list(store, unlocked, faction, json),

        CharactersCommand::Set {
            name,
            rank,
            rarity,
            stars,
            shards,
            level,
            xp,
            bias,
        } => {
            let update = ProgressUpdate {
                rank,
                rarity,
                stars,
                shards,
                level: level.map(|level| (level, xp)),
                bias,
            };
            commands::characters::set(store, &name, update)
        }

        CharactersCommand::Reset { name } => commands::characters::reset(store, &name),
    }
}

/// Dispatch goal subcommands
pub fn dispatch_goals<S: KeyValueStore>(store: &mut Store<S>, command: GoalsCommand) -> Result<()> {
    match command {
        GoalsCommand::List { json } => commands::goals::list(store, json),

        GoalsCommand::Add {
            character,
            kind,
            rank,
            point5,
            rarity,
            priority,
            notes,
            ignore_rank_rarity,
        } => {
            let request = GoalRequest {
                character,
                goal_type: kind.into(),
                rank,
                point5,
                rarity,
                priority,
                notes,
                ignore_rank_rarity,
            };
            commands::goals::add(store, request).map(|_| ())
        }

        GoalsCommand::Remove { id } => commands::goals::remove(store, &id),
    }
}

/// Dispatch guild war subcommands
pub fn dispatch_guild_war<S: KeyValueStore>(
    store: &mut Store<S>,
    command: GuildWarCommand,
) -> Result<()> {
    use commands::guild_war;

    match command {
        GuildWarCommand::Show { json } => guild_war::show(store, json),
        GuildWarCommand::Team {
            team_id,
            characters,
            cap,
            name,
        } => guild_war::team(store, &team_id, &characters, cap, name),
        GuildWarCommand::ClearTeam { team_id } => guild_war::clear_team(store, &team_id),
        GuildWarCommand::Caps { caps } => guild_war::caps(store, caps),
        GuildWarCommand::BfLevel { level } => guild_war::bf_level(store, level),
        GuildWarCommand::ZoneDifficulty { difficulty } => {
            guild_war::zone_difficulty(store, difficulty)
        }
        GuildWarCommand::Section { section } => guild_war::section(store, &section),
        GuildWarCommand::LayoutBf { layout_id, level } => {
            guild_war::layout_bf(store, &layout_id, level)
        }
        GuildWarCommand::SwapZones {
            layout_id,
            first,
            second,
        } => guild_war::swap_zones(store, &layout_id, first, second),
        GuildWarCommand::Deploy { characters } => guild_war::deploy(store, &characters),
        GuildWarCommand::Withdraw { characters } => guild_war::withdraw(store, &characters),
        GuildWarCommand::ClearDeployed => guild_war::clear_deployed(store),
        GuildWarCommand::Reset => guild_war::reset(store),
    }
}

/// Dispatch legendary event subcommands
pub fn dispatch_events<S: KeyValueStore>(
    store: &mut Store<S>,
    command: EventsCommand,
) -> Result<()> {
    match command {
        EventsCommand::List => commands::events::list(store),
        EventsCommand::Show {
            id,
            track,
            limit,
            json,
        } => commands::events::show(store, &id, track, limit, json),
        EventsCommand::Toggle {
            id,
            track,
            restriction,
        } => commands::events::toggle(store, &id, track, &restriction),
        EventsCommand::Reset { id, track } => commands::events::reset(store, &id, track),
        EventsCommand::Pick {
            id,
            track,
            team,
            characters,
        } => commands::events::pick(store, &id, track, &team, &characters),
        EventsCommand::Unpick {
            id,
            track,
            team,
            characters,
        } => commands::events::unpick(store, &id, track, &team, &characters),
        EventsCommand::Order { by, direction } => commands::events::order(store, by, direction),
    }
}
