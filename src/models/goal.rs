use serde::{Deserialize, Serialize};

pub const PROGRESS_MIN: u8 = 0;
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    /// Percent complete, always within `PROGRESS_MIN..=PROGRESS_MAX`.
    pub progress: u8,
    pub target: u8,
}

impl Goal {
    pub fn new(id: impl Into<String>, title: impl Into<String>, progress: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            progress: progress.min(PROGRESS_MAX),
            target: PROGRESS_MAX,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }
}
