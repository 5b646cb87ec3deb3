//! Legendary event command CLI definitions

use clap::Subcommand;
use tacticus::legendary_event::{SortDirection, TeamOrderKey};
use tacticus::TrackKey;

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List legendary events
    List,

    /// Show tracks, restrictions and the best characters per track
    Show {
        /// Event id
        id: String,

        /// Only this track
        #[arg(short, long)]
        track: Option<TrackKey>,

        /// How many characters to rank per track
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select or deselect a restriction
    Toggle {
        id: String,
        track: TrackKey,
        restriction: String,
    },

    /// Go back to the default restriction selection for a track
    Reset { id: String, track: TrackKey },

    /// Add characters to a named team on a track (at most 5 per team)
    Pick {
        id: String,
        track: TrackKey,
        team: String,
        #[arg(required = true)]
        characters: Vec<String>,
    },

    /// Remove characters from a named team on a track
    Unpick {
        id: String,
        track: TrackKey,
        team: String,
        #[arg(required = true)]
        characters: Vec<String>,
    },

    /// Set how selected teams are ordered (name, rank or rarity)
    Order {
        by: TeamOrderKey,
        #[arg(default_value = "asc")]
        direction: SortDirection,
    },
}
