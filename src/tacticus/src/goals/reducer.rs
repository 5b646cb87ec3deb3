//! Personal goal list transitions

use serde::{Deserialize, Serialize};

use super::{PersonalGoal, NOTES_MAX_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GoalsAction {
    Set {
        #[serde(default)]
        value: Option<Vec<PersonalGoal>>,
    },
    Add {
        goal: PersonalGoal,
    },
    Update {
        goal: PersonalGoal,
    },
    #[serde(rename_all = "camelCase")]
    Delete {
        goal_id: String,
    },
}

/// Apply `action` to the goal list.
///
/// The returned list is ordered by priority, and priorities run densely
/// from 1 to the number of goals.
pub fn goals_reducer(state: &[PersonalGoal], action: GoalsAction) -> Vec<PersonalGoal> {
    match action {
        GoalsAction::Set { value } => {
            let mut goals: Vec<PersonalGoal> = value
                .unwrap_or_default()
                .into_iter()
                .map(normalize)
                .collect();
            goals.sort_by_key(|g| g.priority);
            renumber(goals)
        }
        GoalsAction::Add { goal } => {
            if state.iter().any(|g| g.id == goal.id) {
                tracing::debug!("goal {} already exists, updating it", goal.id);
                return goals_reducer(state, GoalsAction::Update { goal });
            }
            let mut goals = state.to_vec();
            let position = insert_position(goal.priority, goals.len());
            goals.insert(position, normalize(goal));
            renumber(goals)
        }
        GoalsAction::Update { goal } => {
            let Some(index) = state.iter().position(|g| g.id == goal.id) else {
                tracing::debug!("goal {} not found, ignoring update", goal.id);
                return state.to_vec();
            };
            let mut goals = state.to_vec();
            goals.remove(index);
            let position = insert_position(goal.priority, goals.len());
            goals.insert(position, normalize(goal));
            renumber(goals)
        }
        GoalsAction::Delete { goal_id } => {
            if !state.iter().any(|g| g.id == goal_id) {
                tracing::debug!("goal {} not found, nothing to delete", goal_id);
                return state.to_vec();
            }
            let goals = state.iter().filter(|g| g.id != goal_id).cloned().collect();
            renumber(goals)
        }
    }
}

/// Index for a goal requesting `priority` among `len` other goals
fn insert_position(priority: u32, len: usize) -> usize {
    (priority.max(1) as usize - 1).min(len)
}

fn renumber(mut goals: Vec<PersonalGoal>) -> Vec<PersonalGoal> {
    for (i, goal) in goals.iter_mut().enumerate() {
        goal.priority = i as u32 + 1;
    }
    goals
}

fn normalize(mut goal: PersonalGoal) -> PersonalGoal {
    if let Some(notes) = goal.notes.as_mut() {
        if notes.chars().count() > NOTES_MAX_LEN {
            *notes = notes.chars().take(NOTES_MAX_LEN).collect();
        }
    }
    goal
}
