use serde::Serialize;

use crate::{
    events::{Celebration, SiteEvent},
    lock,
    models::{Goal, Habit, Task},
    productivity::{CheckIn, GoalUpdate},
    SiteState,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivitySection {
    pub goals: Vec<Goal>,
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
}

pub fn get_productivity_section(state: &SiteState) -> Result<ProductivitySection, String> {
    Ok(ProductivitySection {
        goals: lock(&state.goals)?.goals().to_vec(),
        tasks: lock(&state.tasks)?.tasks().to_vec(),
        habits: lock(&state.habits)?.habits().to_vec(),
    })
}

pub fn add_goal(state: &SiteState, title: String) -> Result<Option<Goal>, String> {
    Ok(lock(&state.goals)?.add(&title).cloned())
}

pub fn remove_goal(state: &SiteState, goal_id: String) -> Result<Option<Goal>, String> {
    Ok(lock(&state.goals)?.remove(&goal_id))
}

/// Applies a progress delta and celebrates when the goal first reaches 100%.
pub fn update_goal_progress(
    state: &SiteState,
    goal_id: String,
    delta: i32,
) -> Result<Option<GoalUpdate>, String> {
    let update = lock(&state.goals)?.adjust_progress(&goal_id, delta);

    if let Some(update) = &update {
        if update.just_completed {
            state.emit(SiteEvent::Celebration(Celebration::GoalCompleted {
                goal_id: update.goal.id.clone(),
            }))?;
        }
    }

    Ok(update)
}

pub fn add_task(state: &SiteState, text: String) -> Result<Option<Task>, String> {
    Ok(lock(&state.tasks)?.add(&text).cloned())
}

/// Flips completion; completing (not un-completing) a task celebrates.
pub fn toggle_task(state: &SiteState, task_id: String) -> Result<Option<Task>, String> {
    let task = lock(&state.tasks)?.toggle(&task_id).cloned();

    if let Some(task) = &task {
        if task.completed {
            state.emit(SiteEvent::Celebration(Celebration::TaskCompleted {
                task_id: task.id.clone(),
            }))?;
        }
    }

    Ok(task)
}

pub fn delete_task(state: &SiteState, task_id: String) -> Result<Option<Task>, String> {
    Ok(lock(&state.tasks)?.remove(&task_id))
}

pub fn add_habit(state: &SiteState, name: String) -> Result<Option<Habit>, String> {
    Ok(lock(&state.habits)?.add(&name).cloned())
}

pub fn remove_habit(state: &SiteState, habit_id: String) -> Result<Option<Habit>, String> {
    Ok(lock(&state.habits)?.remove(&habit_id))
}

pub fn check_habit(state: &SiteState, habit_id: String) -> Result<Option<CheckIn>, String> {
    let outcome = lock(&state.habits)?.check_in(&habit_id);

    if let Some(CheckIn::Recorded { habit }) = &outcome {
        state.emit(SiteEvent::Celebration(Celebration::HabitChecked {
            habit_id: habit.id.clone(),
            streak: habit.streak,
        }))?;
    }

    Ok(outcome)
}

/// External day rollover: re-enables check-ins for every habit.
pub fn start_new_day(state: &SiteState) -> Result<Vec<Habit>, String> {
    let mut habits = lock(&state.habits)?;
    habits.start_new_day();
    log::info!("New day started; habit check-ins cleared");
    Ok(habits.habits().to_vec())
}
