pub mod commands;
pub mod scorer;

pub use scorer::{classify, QuizResult, QuizScorer, QuizSnapshot, Tier};
