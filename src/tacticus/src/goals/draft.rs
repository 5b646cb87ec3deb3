//! Choices offered while drafting a goal, and the check run before saving it

use super::{GoalError, PersonalGoal, PersonalGoalType};
use crate::character::Character;
use crate::reference::{Rank, Rarity};

/// Characters a goal of `goal_type` can be set for.
///
/// Unlock goals only apply to locked characters; rank and ascension goals
/// need an unlocked character unless rank/rarity limits are ignored.
pub fn allowed_characters(
    characters: &[Character],
    goal_type: PersonalGoalType,
    ignore_rank_rarity: bool,
) -> Vec<&Character> {
    characters
        .iter()
        .filter(|c| match goal_type {
            PersonalGoalType::Unlock => !c.is_unlocked(),
            PersonalGoalType::UpgradeRank | PersonalGoalType::Ascend => {
                ignore_rank_rarity || c.is_unlocked()
            }
        })
        .collect()
}

/// Target rarities: the character's current one and above
pub fn allowed_rarities(character: &Character) -> Vec<Rarity> {
    Rarity::ALL
        .iter()
        .copied()
        .filter(|r| *r >= character.rarity())
        .collect()
}

/// Target ranks: from the current rank up to what the rarity allows
pub fn allowed_ranks(character: &Character, ignore_rank_rarity: bool) -> Vec<Rank> {
    let max = if ignore_rank_rarity {
        Rank::Diamond3
    } else {
        character.rarity().max_rank()
    };
    Rank::ALL
        .iter()
        .copied()
        .filter(|r| *r != Rank::Locked && *r >= character.rank() && *r <= max)
        .collect()
}

/// Reject goals that are incomplete or already reached.
pub fn validate_goal(goal: &PersonalGoal, character: &Character) -> Result<(), GoalError> {
    if goal.character != character.name() {
        return Err(GoalError::CharacterMismatch {
            goal: goal.character.clone(),
            character: character.name().to_string(),
        });
    }

    match goal.goal_type {
        PersonalGoalType::UpgradeRank => {
            let target = goal.target_rank.ok_or(GoalError::MissingTarget("rank"))?;
            if target < character.rank() || (target == character.rank() && !goal.rank_point5) {
                return Err(GoalError::AlreadyReached(character.name().to_string()));
            }
        }
        PersonalGoalType::Ascend => {
            let target = goal
                .target_rarity
                .ok_or(GoalError::MissingTarget("rarity"))?;
            if target <= character.rarity() {
                return Err(GoalError::AlreadyReached(character.name().to_string()));
            }
        }
        PersonalGoalType::Unlock => {
            if character.is_unlocked() {
                return Err(GoalError::AlreadyReached(character.name().to_string()));
            }
        }
    }
    Ok(())
}
