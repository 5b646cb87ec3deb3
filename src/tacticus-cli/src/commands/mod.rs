//! Command handlers for the tacticus CLI
//!
//! Each subcommand has its own module with handler functions. Handlers work
//! on any [`Store`] so tests can drive them against memory storage.

pub mod characters;
pub mod configure;
pub mod events;
pub mod goals;
pub mod guild_war;

use anyhow::{bail, Result};
use tacticus::{KeyValueStore, Store};

/// Match a character name from the command line against the roster.
///
/// Exact matches win; otherwise a unique case-insensitive match is used.
pub fn resolve_character<S: KeyValueStore>(store: &Store<S>, name: &str) -> Result<String> {
    let characters = &store.state().characters;
    if let Some(c) = characters.iter().find(|c| c.name() == name) {
        return Ok(c.name().to_string());
    }

    let lower = name.to_lowercase();
    let matches: Vec<&str> = characters
        .iter()
        .map(|c| c.name())
        .filter(|n| n.to_lowercase() == lower)
        .collect();
    match matches.as_slice() {
        [one] => Ok(one.to_string()),
        [] => bail!("Unknown character: {}", name),
        _ => bail!("Ambiguous character name: {}", name),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tacticus::MemoryStore;

    pub(crate) fn memory_store() -> Store<MemoryStore> {
        Store::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_resolve_character() {
        let store = memory_store();
        assert_eq!(resolve_character(&store, "Ragnar").unwrap(), "Ragnar");
        assert_eq!(resolve_character(&store, "ragnar").unwrap(), "Ragnar");
        assert!(resolve_character(&store, "Nobody").is_err());
    }
}
