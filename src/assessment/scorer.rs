use anyhow::{bail, Result};
use serde::Serialize;

use crate::content::wellness::{QuizQuestion, QUIZ_QUESTIONS};
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Highest total still rated `Great`.
pub const GREAT_MAX: u32 = 3;
/// Highest total still rated `Moderate`.
pub const MODERATE_MAX: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Great,
    Moderate,
    #[serde(rename = "High Stress")]
    HighStress,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Great => "Great",
            Tier::Moderate => "Moderate",
            Tier::HighStress => "High Stress",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Great => "You seem to be managing well! Keep up your positive habits and continue to prioritize self-care.",
            Tier::Moderate => "You may be experiencing some stress. Consider implementing more relaxation techniques and reaching out for support.",
            Tier::HighStress => "It appears you may be experiencing significant stress. We strongly recommend speaking with a mental health professional.",
        }
    }
}

/// Thresholds are inclusive: `..=3` Great, `4..=6` Moderate, `7..` High Stress.
pub fn classify(score: u32) -> Tier {
    if score <= GREAT_MAX {
        Tier::Great
    } else if score <= MODERATE_MAX {
        Tier::Moderate
    } else {
        Tier::HighStress
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub max_score: u32,
    pub tier: Tier,
    pub message: &'static str,
    /// `score / max_score` as a percentage, for the result bar.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
    pub answers: Vec<Option<u8>>,
    pub complete: bool,
    pub showing_results: bool,
    /// Only present once results are showing.
    pub result: Option<QuizResult>,
}

#[derive(Debug, Clone)]
pub struct QuizScorer {
    questions: &'static [QuizQuestion],
    answers: Vec<Option<u8>>,
    showing_results: bool,
}

impl QuizScorer {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            answers: vec![None; questions.len()],
            showing_results: false,
        }
    }

    /// The three-question check-in on the mental health section.
    pub fn wellness_check_in() -> Self {
        Self::new(QUIZ_QUESTIONS)
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    pub fn answer(&self, question_index: usize) -> Option<u8> {
        self.answers.get(question_index).copied().flatten()
    }

    /// Overwrites any earlier answer to the same question. While results are
    /// showing the questions are hidden, so answers are ignored until `reset`.
    pub fn record_answer(&mut self, question_index: usize, score: u8) -> Result<()> {
        let Some(question) = self.questions.get(question_index) else {
            bail!(
                "question index {} out of range ({} questions)",
                question_index,
                self.questions.len()
            );
        };
        if !question.accepts(score) {
            bail!("score {} is not an option for question {}", score, question_index);
        }
        if self.showing_results {
            log_debug!("Ignoring answer to question {} while results are showing", question_index);
            return Ok(());
        }

        self.answers[question_index] = Some(score);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| u32::from(q.max_score())).sum()
    }

    pub fn compute_result(&self) -> Option<QuizResult> {
        if !self.is_complete() {
            return None;
        }

        let score: u32 = self.answers.iter().flatten().map(|&s| u32::from(s)).sum();
        let max_score = self.max_score();
        let tier = classify(score);
        let percent = if max_score == 0 {
            0.0
        } else {
            f64::from(score) / f64::from(max_score) * 100.0
        };

        Some(QuizResult {
            score,
            max_score,
            tier,
            message: tier.message(),
            percent,
        })
    }

    /// Switches to the results view. Does nothing until every question is answered.
    pub fn submit(&mut self) -> Option<QuizResult> {
        let Some(result) = self.compute_result() else {
            log_debug!("Quiz submitted before completion; ignoring");
            return None;
        };
        self.showing_results = true;
        log_info!("Quiz completed with score {} ({})", result.score, result.tier.label());
        Some(result)
    }

    pub fn is_showing_results(&self) -> bool {
        self.showing_results
    }

    pub fn reset(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.showing_results = false;
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            answers: self.answers.clone(),
            complete: self.is_complete(),
            showing_results: self.showing_results,
            result: if self.showing_results {
                self.compute_result()
            } else {
                None
            },
        }
    }
}
