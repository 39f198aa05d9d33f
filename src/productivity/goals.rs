use serde::Serialize;

use crate::{
    clock::new_entity_id,
    log_debug, log_info,
    models::{
        goal::{PROGRESS_MAX, PROGRESS_MIN},
        Goal,
    },
};

const ENABLE_LOGS: bool = true;

/// Size of one "+10%" / "-10%" click.
pub const PROGRESS_STEP: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub goal: Goal,
    /// True only for the update that moved progress from below 100 to 100.
    pub just_completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GoalTracker {
    goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            goals: vec![
                Goal::new("1", "Reduce Paper Usage", 65),
                Goal::new("2", "Digital-First Workflow", 80),
            ],
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Appends a goal at 0%. Blank titles are ignored.
    pub fn add(&mut self, title: &str) -> Option<&Goal> {
        if title.trim().is_empty() {
            log_debug!("Ignoring blank goal title");
            return None;
        }
        self.goals.push(Goal::new(new_entity_id(), title, 0));
        self.goals.last()
    }

    pub fn remove(&mut self, goal_id: &str) -> Option<Goal> {
        let index = self.goals.iter().position(|g| g.id == goal_id)?;
        Some(self.goals.remove(index))
    }

    /// Applies `delta` percent, clamped to `0..=100`.
    pub fn adjust_progress(&mut self, goal_id: &str, delta: i32) -> Option<GoalUpdate> {
        let goal = self.goals.iter_mut().find(|g| g.id == goal_id)?;
        let previous = goal.progress;
        let next = i32::from(previous)
            .saturating_add(delta)
            .clamp(i32::from(PROGRESS_MIN), i32::from(PROGRESS_MAX));
        // Clamped to 0..=100 above, so the cast cannot truncate.
        goal.progress = next as u8;

        let just_completed = goal.is_complete() && previous < PROGRESS_MAX;
        if just_completed {
            log_info!("Goal {} ({}) reached 100%", goal.id, goal.title);
        }

        Some(GoalUpdate {
            goal: goal.clone(),
            just_completed,
        })
    }

    pub fn increase(&mut self, goal_id: &str) -> Option<GoalUpdate> {
        self.adjust_progress(goal_id, PROGRESS_STEP)
    }

    pub fn decrease(&mut self, goal_id: &str) -> Option<GoalUpdate> {
        self.adjust_progress(goal_id, -PROGRESS_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(progress: u8) -> GoalTracker {
        GoalTracker {
            goals: vec![Goal::new("g", "Bike to work", progress)],
        }
    }

    #[test]
    fn progress_clamps_at_100() {
        let mut tracker = tracker_with(95);
        let first = tracker.increase("g").unwrap();
        assert_eq!(first.goal.progress, 100);
        assert!(first.just_completed);

        for _ in 0..3 {
            let update = tracker.increase("g").unwrap();
            assert_eq!(update.goal.progress, 100);
            assert!(!update.just_completed);
        }
    }

    #[test]
    fn progress_clamps_at_zero() {
        let mut tracker = tracker_with(15);
        assert_eq!(tracker.decrease("g").unwrap().goal.progress, 5);
        assert_eq!(tracker.decrease("g").unwrap().goal.progress, 0);
        assert_eq!(tracker.decrease("g").unwrap().goal.progress, 0);
    }

    #[test]
    fn progress_stays_in_bounds_for_any_delta() {
        let mut tracker = tracker_with(50);
        for delta in [250, -1000, 37, i32::MAX / 2, -3, i32::MIN / 2, 99] {
            let progress = tracker.adjust_progress("g", delta).unwrap().goal.progress;
            assert!(progress <= PROGRESS_MAX);
        }
    }

    #[test]
    fn extreme_deltas_saturate() {
        let mut tracker = tracker_with(50);
        let up = tracker.adjust_progress("g", i32::MAX).unwrap();
        assert_eq!(up.goal.progress, 100);
        assert!(up.just_completed);
        assert!(!tracker.adjust_progress("g", i32::MAX).unwrap().just_completed);

        let down = tracker.adjust_progress("g", i32::MIN).unwrap();
        assert_eq!(down.goal.progress, 0);
        assert_eq!(tracker.adjust_progress("g", i32::MIN).unwrap().goal.progress, 0);
    }

    #[test]
    fn completion_fires_again_after_dropping_below() {
        let mut tracker = tracker_with(90);
        assert!(tracker.increase("g").unwrap().just_completed);
        assert!(!tracker.decrease("g").unwrap().just_completed);
        assert!(tracker.increase("g").unwrap().just_completed);
    }

    #[test]
    fn blank_goal_is_ignored() {
        let mut tracker = GoalTracker::seeded();
        assert!(tracker.add("  ").is_none());
        assert_eq!(tracker.goals().len(), 2);
    }

    #[test]
    fn new_goal_appends_at_zero() {
        let mut tracker = GoalTracker::seeded();
        let goal = tracker.add("Plant a garden").cloned().unwrap();
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.target, 100);
        assert_eq!(tracker.goals().last(), Some(&goal));
    }

    #[test]
    fn remove_and_unknown_ids() {
        let mut tracker = GoalTracker::seeded();
        assert!(tracker.adjust_progress("nope", 10).is_none());
        assert_eq!(tracker.remove("1").map(|g| g.title), Some("Reduce Paper Usage".into()));
        assert!(tracker.remove("1").is_none());
        assert_eq!(tracker.goals().len(), 1);
    }
}
