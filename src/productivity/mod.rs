//! Goal, task and habit trackers for the productivity section. The three lists
//! are independent of each other.

pub mod commands;
pub mod goals;
pub mod habits;
pub mod tasks;

pub use goals::{GoalTracker, GoalUpdate, PROGRESS_STEP};
pub use habits::{CheckIn, HabitTracker};
pub use tasks::TaskList;
