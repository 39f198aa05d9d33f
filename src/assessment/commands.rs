use serde::Serialize;

use crate::{
    assessment::{QuizResult, QuizSnapshot},
    content::wellness::{CrisisResource, EducationTopic, QuizQuestion, CRISIS_RESOURCES, EDUCATION_TOPICS},
    lock, SiteState,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSection {
    pub questions: &'static [QuizQuestion],
    pub quiz: QuizSnapshot,
    pub education: &'static [EducationTopic],
    pub crisis_resources: &'static [CrisisResource],
}

pub fn get_wellness_section(state: &SiteState) -> Result<WellnessSection, String> {
    let quiz = lock(&state.quiz)?;
    Ok(WellnessSection {
        questions: quiz.questions(),
        quiz: quiz.snapshot(),
        education: EDUCATION_TOPICS,
        crisis_resources: CRISIS_RESOURCES,
    })
}

pub fn answer_question(
    state: &SiteState,
    question_index: usize,
    score: u8,
) -> Result<QuizSnapshot, String> {
    let mut quiz = lock(&state.quiz)?;
    quiz.record_answer(question_index, score)
        .map_err(|e| e.to_string())?;
    Ok(quiz.snapshot())
}

/// `None` while questions remain unanswered.
pub fn submit_quiz(state: &SiteState) -> Result<Option<QuizResult>, String> {
    Ok(lock(&state.quiz)?.submit())
}

pub fn reset_quiz(state: &SiteState) -> Result<QuizSnapshot, String> {
    let mut quiz = lock(&state.quiz)?;
    quiz.reset();
    Ok(quiz.snapshot())
}
