use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Consecutive days checked in.
    pub streak: u32,
    /// Set by a check-in; only cleared by an explicit new-day reset.
    pub checked_today: bool,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, streak: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            streak,
            checked_today: false,
        }
    }
}
