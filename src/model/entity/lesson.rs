use serde::{Deserialize, Serialize};

use crate::model::entity::{Language, Question};
use crate::model::repo::{ResourceType, ResourceTyped};

pub const QUESTIONS_PER_LESSON: usize = 5;

pub const LESSONS_PER_LEVEL: u32 = 5;

pub const LESSON_XP_REWARD: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    id: u32,
    language: Language,
    level: u32,
    lesson_number: u32,
    questions: Vec<Question>,
    xp_reward: u32,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> ResourceType {
        ResourceType::Lesson
    }
}

impl Lesson {
    pub fn new(language: Language, lesson_number: u32, questions: Vec<Question>) -> Self {
        Self {
            id: lesson_number,
            language,
            level: Self::level_for(lesson_number),
            lesson_number,
            questions,
            xp_reward: LESSON_XP_REWARD,
        }
    }

    pub fn level_for(lesson_number: u32) -> u32 {
        lesson_number.saturating_sub(1) / LESSONS_PER_LEVEL + 1
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lesson_number(&self) -> u32 {
        self.lesson_number
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }
}
