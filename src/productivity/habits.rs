use serde::Serialize;

use crate::{clock::new_entity_id, log_debug, log_info, models::Habit};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CheckIn {
    /// Streak went up by one.
    Recorded { habit: Habit },
    /// Already checked today; nothing changed.
    AlreadyChecked { habit: Habit },
}

impl CheckIn {
    pub fn habit(&self) -> &Habit {
        match self {
            CheckIn::Recorded { habit } | CheckIn::AlreadyChecked { habit } => habit,
        }
    }
}

/// Daily habits. There is no built-in day boundary: `checked_today` stays set
/// until the owner calls [`HabitTracker::start_new_day`].
#[derive(Debug, Clone, Default)]
pub struct HabitTracker {
    habits: Vec<Habit>,
}

impl HabitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            habits: vec![
                Habit::new("1", "Digital Note-Taking", 7),
                Habit::new("2", "Paperless Meetings", 5),
                Habit::new("3", "Energy-Saving Mode", 10),
            ],
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn add(&mut self, name: &str) -> Option<&Habit> {
        if name.trim().is_empty() {
            log_debug!("Ignoring blank habit name");
            return None;
        }
        self.habits.push(Habit::new(new_entity_id(), name, 0));
        self.habits.last()
    }

    pub fn remove(&mut self, habit_id: &str) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id == habit_id)?;
        Some(self.habits.remove(index))
    }

    pub fn check_in(&mut self, habit_id: &str) -> Option<CheckIn> {
        let habit = self.habits.iter_mut().find(|h| h.id == habit_id)?;
        if habit.checked_today {
            return Some(CheckIn::AlreadyChecked {
                habit: habit.clone(),
            });
        }

        habit.streak = habit.streak.saturating_add(1);
        habit.checked_today = true;
        log_info!("Habit {} checked in, streak {}", habit.name, habit.streak);
        Some(CheckIn::Recorded {
            habit: habit.clone(),
        })
    }

    /// Clears every `checked_today` flag. Streaks are kept.
    pub fn start_new_day(&mut self) {
        for habit in &mut self.habits {
            habit.checked_today = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_is_idempotent_until_new_day() {
        let mut tracker = HabitTracker::seeded();

        let first = tracker.check_in("1").unwrap();
        assert!(matches!(first, CheckIn::Recorded { .. }));
        assert_eq!(first.habit().streak, 8);
        assert!(first.habit().checked_today);

        let second = tracker.check_in("1").unwrap();
        assert!(matches!(second, CheckIn::AlreadyChecked { .. }));
        assert_eq!(second.habit().streak, 8);

        tracker.start_new_day();
        assert!(tracker.habits().iter().all(|h| !h.checked_today));
        assert_eq!(tracker.check_in("1").unwrap().habit().streak, 9);
    }

    #[test]
    fn check_in_only_touches_one_habit() {
        let mut tracker = HabitTracker::seeded();
        tracker.check_in("3");
        let streaks: Vec<_> = tracker.habits().iter().map(|h| h.streak).collect();
        assert_eq!(streaks, vec![7, 5, 11]);
    }

    #[test]
    fn unknown_habit_is_none() {
        let mut tracker = HabitTracker::seeded();
        assert!(tracker.check_in("42").is_none());
    }

    #[test]
    fn add_and_remove_habits() {
        let mut tracker = HabitTracker::new();
        assert!(tracker.add("").is_none());
        let id = tracker.add("Cold showers").unwrap().id.clone();
        assert_eq!(tracker.habits()[0].streak, 0);
        assert!(tracker.remove(&id).is_some());
        assert!(tracker.habits().is_empty());
    }
}
