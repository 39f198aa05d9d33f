pub mod commands;
pub mod commitments;

pub use commitments::{commitment_key, CommitmentLedger, ImpactSummary, POINTS_PER_COMMITMENT};
