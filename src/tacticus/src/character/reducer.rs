//! Character progression reducer

use serde::{Deserialize, Serialize};

use super::{default_roster, Character};
use crate::reference::{CharacterBias, Rank, Rarity, RarityStars};

/// Edits to the character roster. Every variant except `Set` targets one
/// character by name; an unknown name leaves the roster unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CharactersAction {
    Set {
        #[serde(default)]
        value: Option<Vec<Character>>,
    },
    UpdateRank {
        character: String,
        value: Rank,
    },
    UpdateRarity {
        character: String,
        value: Rarity,
    },
    UpdateStars {
        character: String,
        value: RarityStars,
    },
    UpdateShards {
        character: String,
        value: u32,
    },
    UpdateLevel {
        character: String,
        level: u32,
        xp: u32,
    },
    UpdateAbilities {
        character: String,
        active: u32,
        passive: u32,
    },
    UpdateUpgrades {
        character: String,
        value: Vec<String>,
    },
    UpdateBias {
        character: String,
        value: CharacterBias,
    },
    Reset {
        character: String,
    },
}

impl CharactersAction {
    fn target(&self) -> Option<&str> {
        match self {
            CharactersAction::Set { .. } => None,
            CharactersAction::UpdateRank { character, .. }
            | CharactersAction::UpdateRarity { character, .. }
            | CharactersAction::UpdateStars { character, .. }
            | CharactersAction::UpdateShards { character, .. }
            | CharactersAction::UpdateLevel { character, .. }
            | CharactersAction::UpdateAbilities { character, .. }
            | CharactersAction::UpdateUpgrades { character, .. }
            | CharactersAction::UpdateBias { character, .. }
            | CharactersAction::Reset { character } => Some(character),
        }
    }
}

/// Apply `action` to `state`, returning the new roster.
pub fn characters_reducer(state: &[Character], action: CharactersAction) -> Vec<Character> {
    if let CharactersAction::Set { value } = action {
        return value.unwrap_or_else(default_roster);
    }

    let Some(name) = action.target() else {
        return state.to_vec();
    };
    let Some(index) = state.iter().position(|c| c.name() == name) else {
        tracing::debug!("character {} not found, ignoring {:?}", name, action);
        return state.to_vec();
    };

    let mut updated = state[index].clone();
    apply(&mut updated, action);

    let mut next = state.to_vec();
    next[index] = updated;
    next
}

fn apply(character: &mut Character, action: CharactersAction) {
    if let CharactersAction::Reset { .. } = action {
        character.reset();
        return;
    }

    let progress = &mut character.progress;
    match action {
        CharactersAction::Set { .. } | CharactersAction::Reset { .. } => {}
        CharactersAction::UpdateRank { value, .. } => {
            progress.rank = value;
        }
        CharactersAction::UpdateRarity { value, .. } => {
            progress.rarity = value;
            progress.rank = progress.rank.min(value.max_rank());
            progress.stars = progress.stars.clamp_to(value);
        }
        CharactersAction::UpdateStars { value, .. } => {
            progress.stars = value.clamp_to(progress.rarity);
        }
        CharactersAction::UpdateShards { value, .. } => {
            progress.shards = value;
        }
        CharactersAction::UpdateLevel { level, xp, .. } => {
            progress.level = level;
            progress.xp = xp;
        }
        CharactersAction::UpdateAbilities {
            active, passive, ..
        } => {
            progress.active_ability_level = active;
            progress.passive_ability_level = passive;
        }
        CharactersAction::UpdateUpgrades { value, .. } => {
            progress.upgrades = value;
        }
        CharactersAction::UpdateBias { value, .. } => {
            progress.bias = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::tests::unit;
    use crate::reference::Faction;

    fn roster() -> Vec<Character> {
        vec![
            Character::new(unit("A", Faction::Orks)),
            Character::new(unit("B", Faction::Necrons)),
        ]
    }

    fn named(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn test_set_none_restores_default_roster() {
        let next = characters_reducer(&roster(), CharactersAction::Set { value: None });
        assert_eq!(next, default_roster());
    }

    #[test]
    fn test_update_rank_only_touches_target() {
        let state = roster();
        let next = characters_reducer(
            &state,
            CharactersAction::UpdateRank {
                character: named("B"),
                value: Rank::Stone2,
            },
        );
        assert_eq!(next[0], state[0]);
        assert_eq!(next[1].rank(), Rank::Stone2);
        assert_eq!(state[1].rank(), Rank::Locked);
    }

    #[test]
    fn test_lowering_rarity_clamps_rank_and_stars() {
        let mut state = roster();
        state[0].progress.rarity = Rarity::Epic;
        state[0].progress.rank = Rank::Gold1;
        state[0].progress.stars = RarityStars::RedTwoStars;

        let next = characters_reducer(
            &state,
            CharactersAction::UpdateRarity {
                character: named("A"),
                value: Rarity::Uncommon,
            },
        );
        assert_eq!(next[0].rarity(), Rarity::Uncommon);
        assert_eq!(next[0].rank(), Rank::Bronze1);
        assert_eq!(next[0].progress.stars, RarityStars::FourStars);
    }

    #[test]
    fn test_raising_rarity_keeps_rank() {
        let mut state = roster();
        state[0].progress.rank = Rank::Iron1;

        let next = characters_reducer(
            &state,
            CharactersAction::UpdateRarity {
                character: named("A"),
                value: Rarity::Rare,
            },
        );
        assert_eq!(next[0].rank(), Rank::Iron1);
        assert_eq!(next[0].progress.stars, RarityStars::FourStars);
    }

    #[test]
    fn test_stars_clamped_to_rarity() {
        let next = characters_reducer(
            &roster(),
            CharactersAction::UpdateStars {
                character: named("A"),
                value: RarityStars::BlueStar,
            },
        );
        assert_eq!(next[0].progress.stars, RarityStars::TwoStars);
    }

    #[test]
    fn test_unknown_character_is_noop() {
        let state = roster();
        let next = characters_reducer(
            &state,
            CharactersAction::UpdateShards {
                character: named("Nobody"),
                value: 10,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = roster();
        state[1].progress.rank = Rank::Gold3;
        state[1].progress.shards = 120;
        state[1].progress.bias = CharacterBias::NeverRecommend;

        let next = characters_reducer(&state, CharactersAction::Reset { character: named("B") });
        assert_eq!(next.len(), 2);
        assert_eq!(next[1], Character::new(unit("B", Faction::Necrons)));
    }

    #[test]
    fn test_action_json_tag() {
        let action: CharactersAction =
            serde_json::from_str(r#"{"type":"UpdateShards","character":"A","value":40}"#).unwrap();
        assert_eq!(
            action,
            CharactersAction::UpdateShards {
                character: named("A"),
                value: 40
            }
        );
        assert!(serde_json::from_str::<CharactersAction>(r#"{"type":"Explode"}"#).is_err());
    }
}
