use serde::Serialize;
use std::collections::HashMap;

use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Impact points earned per distinct tip committed to.
pub const POINTS_PER_COMMITMENT: u32 = 15;
/// Ceiling for the impact progress bar. The score itself is not capped.
pub const PROGRESS_CAP: u32 = 100;

/// Composite key under which a tip's commit count is stored.
pub fn commitment_key(category: &str, tip: &str) -> String {
    format!("{category}-{tip}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub commitments_made: usize,
    pub total_score: u32,
    pub progress_percent: u32,
}

/// Commit counts per tip. Counts only grow.
#[derive(Debug, Clone, Default)]
pub struct CommitmentLedger {
    counts: HashMap<String, u32>,
}

impl CommitmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeat commits keep counting; returns the new count for this tip.
    pub fn commit(&mut self, category: &str, tip: &str) -> u32 {
        let count = self.counts.entry(commitment_key(category, tip)).or_insert(0);
        *count = count.saturating_add(1);
        if *count == 1 {
            log_info!("New commitment: {} / {}", category, tip);
        }
        *count
    }

    pub fn count(&self, category: &str, tip: &str) -> u32 {
        self.counts
            .get(&commitment_key(category, tip))
            .copied()
            .unwrap_or(0)
    }

    pub fn commitments_made(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    /// Distinct tips × 15. Repeat commits to the same tip add nothing.
    pub fn total_score(&self) -> u32 {
        let distinct = u32::try_from(self.commitments_made()).unwrap_or(u32::MAX);
        distinct.saturating_mul(POINTS_PER_COMMITMENT)
    }

    pub fn progress_percent(&self) -> u32 {
        self.total_score().min(PROGRESS_CAP)
    }

    pub fn summary(&self) -> ImpactSummary {
        ImpactSummary {
            commitments_made: self.commitments_made(),
            total_score: self.total_score(),
            progress_percent: self.progress_percent(),
        }
    }
}
