//! Goal command handlers

use anyhow::{bail, Result};
use tacticus::goals::{allowed_ranks, allowed_rarities, validate_goal};
use tacticus::{
    Action, GoalsAction, KeyValueStore, PersonalGoal, PersonalGoalType, Rank, Rarity, Store,
};

use super::resolve_character;

/// A goal as requested on the command line
#[derive(Debug)]
pub struct GoalRequest {
    pub character: String,
    pub goal_type: PersonalGoalType,
    pub rank: Option<Rank>,
    pub point5: bool,
    pub rarity: Option<Rarity>,
    pub priority: Option<u32>,
    pub notes: Option<String>,
    pub ignore_rank_rarity: bool,
}

pub fn list<S: KeyValueStore>(store: &Store<S>, json: bool) -> Result<()> {
    let goals = &store.state().goals;

    if json {
        println!("{}", serde_json::to_string_pretty(goals)?);
        return Ok(());
    }

    if goals.is_empty() {
        println!("No goals");
        return Ok(());
    }

    for goal in goals {
        println!(
            "{:>2}. {:<24} {:<28} {}",
            goal.priority,
            goal.character,
            describe(goal),
            short_id(&goal.id)
        );
        if let Some(notes) = &goal.notes {
            println!("    {}", notes);
        }
    }
    Ok(())
}

fn describe(goal: &PersonalGoal) -> String {
    match goal.goal_type {
        PersonalGoalType::Unlock => "unlock".to_string(),
        PersonalGoalType::Ascend => match goal.target_rarity {
            Some(rarity) => format!("ascend to {}", rarity),
            None => "ascend".to_string(),
        },
        PersonalGoalType::UpgradeRank => match goal.target_rank {
            Some(rank) if goal.rank_point5 => format!("rank up to {}.5", rank),
            Some(rank) => format!("rank up to {}", rank),
            None => "rank up".to_string(),
        },
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Build the goal for `request`, checking it the way the goal editor does
fn build_goal<S: KeyValueStore>(store: &Store<S>, request: GoalRequest) -> Result<PersonalGoal> {
    let name = resolve_character(store, &request.character)?;
    let Some(character) = store.state().characters.iter().find(|c| c.name() == name) else {
        bail!("Unknown character: {}", name);
    };

    if let Some(rank) = request.rank {
        if !allowed_ranks(character, request.ignore_rank_rarity).contains(&rank) {
            bail!(
                "{} cannot reach {} at {} (use --ignore-rank-rarity to plan ahead)",
                name,
                rank,
                character.rarity()
            );
        }
    }
    if let Some(rarity) = request.rarity {
        if !allowed_rarities(character).contains(&rarity) {
            bail!("{} is already above {}", name, rarity);
        }
    }

    let priority = request
        .priority
        .unwrap_or(store.state().goals.len() as u32 + 1);
    let mut goal = PersonalGoal::new(name, request.goal_type, priority);
    goal.target_rank = request.rank;
    goal.target_rarity = request.rarity;
    goal.rank_point5 = request.point5;
    goal.notes = request.notes.filter(|n| !n.is_empty());

    validate_goal(&goal, character)?;
    Ok(goal)
}

pub fn add<S: KeyValueStore>(store: &mut Store<S>, request: GoalRequest) -> Result<String> {
    let goal = build_goal(store, request)?;
    let id = goal.id.clone();
    store.dispatch(Action::Goals(GoalsAction::Add { goal }))?;

    if let Some(goal) = store.state().goals.iter().find(|g| g.id == id) {
        println!(
            "Added goal {} for {}: {} (priority {})",
            short_id(&goal.id),
            goal.character,
            describe(goal),
            goal.priority
        );
    }
    Ok(id)
}

pub fn remove<S: KeyValueStore>(store: &mut Store<S>, id: &str) -> Result<()> {
    let matches: Vec<&PersonalGoal> = store
        .state()
        .goals
        .iter()
        .filter(|g| g.id.starts_with(id))
        .collect();

    let goal_id = match matches.as_slice() {
        [goal] => goal.id.clone(),
        [] => bail!("No goal matches {}", id),
        _ => bail!("{} matches {} goals, use more of the id", id, matches.len()),
    };

    store.dispatch(Action::Goals(GoalsAction::Delete {
        goal_id: goal_id.clone(),
    }))?;
    println!("Removed goal {}", short_id(&goal_id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::memory_store;
    use tacticus::CharactersAction;

    fn request(character: &str, goal_type: PersonalGoalType) -> GoalRequest {
        GoalRequest {
            character: character.to_string(),
            goal_type,
            rank: None,
            point5: false,
            rarity: None,
            priority: None,
            notes: None,
            ignore_rank_rarity: false,
        }
    }

    #[test]
    fn test_add_unlock_and_remove() {
        let mut store = memory_store();
        let id = add(&mut store, request("Ragnar", PersonalGoalType::Unlock)).unwrap();
        assert_eq!(store.state().goals.len(), 1);
        assert_eq!(store.state().goals[0].priority, 1);

        remove(&mut store, &id[..8]).unwrap();
        assert!(store.state().goals.is_empty());
    }

    #[test]
    fn test_rank_beyond_rarity_rejected() {
        let mut store = memory_store();
        store
            .dispatch(Action::Characters(CharactersAction::UpdateRank {
                character: "Ragnar".to_string(),
                value: Rank::Stone1,
            }))
            .unwrap();

        // Ragnar starts Rare, which tops out at Silver I
        let mut req = request("Ragnar", PersonalGoalType::UpgradeRank);
        req.rank = Some(Rank::Gold1);
        assert!(add(&mut store, req).is_err());

        let mut req = request("Ragnar", PersonalGoalType::UpgradeRank);
        req.rank = Some(Rank::Gold1);
        req.ignore_rank_rarity = true;
        assert!(add(&mut store, req).is_ok());

        let mut req = request("Ragnar", PersonalGoalType::UpgradeRank);
        req.rank = Some(Rank::Silver1);
        req.priority = Some(1);
        add(&mut store, req).unwrap();
        assert_eq!(store.state().goals[0].target_rank, Some(Rank::Silver1));
        assert_eq!(store.state().goals[1].priority, 2);
    }

    #[test]
    fn test_missing_target_rejected() {
        let mut store = memory_store();
        let req = request("Ragnar", PersonalGoalType::Ascend);
        assert!(add(&mut store, req).is_err());
    }

    #[test]
    fn test_remove_unknown() {
        let mut store = memory_store();
        assert!(remove(&mut store, "nope").is_err());
    }

    #[test]
    fn test_describe() {
        let goal = PersonalGoal::new("Ragnar", PersonalGoalType::UpgradeRank, 1)
            .with_target_rank(Rank::Gold1);
        assert_eq!(describe(&goal), format!("rank up to {}", Rank::Gold1));
    }
}
