//! Guild war lineup planning.
//!
//! The [`GuildWar`] aggregate holds defense and offense teams, battlefield
//! layouts and the set of characters deployed on offense. It is changed only
//! through [`guild_war_reducer`].
//!
//! A character can sit in at most one team of each type: assigning it to a
//! team removes it from every other team of the same type.

mod models;
mod reducer;

pub use models::{
    GuildWar, GuildWarLayout, GuildWarLayoutZone, GuildWarTeam, GuildWarTeamType, ZoneId,
    BATTLEFIELD_LEVELS, DEFENSE_TEAM_COUNT, LINEUP_SIZE, OFFENSE_TEAM_COUNT, TEAM_NAME_MAX_LEN,
};
pub use reducer::{guild_war_reducer, GuildWarAction};
