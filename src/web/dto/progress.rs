use serde::{Deserialize, Serialize};

use crate::leveling::{CompletionRequest, CompletionSummary};
use crate::model::entity::Language;

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteLessonBody {
    user_id: String,
    language: Language,
    level: u32,
    lesson_number: u32,
    correct_answers: u32,
    total_questions: u32,
}

impl From<CompleteLessonBody> for CompletionRequest {
    fn from(body: CompleteLessonBody) -> Self {
        Self {
            user_id: body.user_id,
            language: body.language,
            level: body.level,
            lesson_number: body.lesson_number,
            correct_answers: body.correct_answers,
            total_questions: body.total_questions,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteLessonResponse {
    xp_earned: u32,
    new_xp: u32,
    new_level: u32,
    leveled_up: bool,
    new_streak: u32,
}

impl From<CompletionSummary> for CompleteLessonResponse {
    fn from(summary: CompletionSummary) -> Self {
        Self {
            xp_earned: summary.xp_earned,
            new_xp: summary.new_xp,
            new_level: summary.new_level,
            leveled_up: summary.leveled_up,
            new_streak: summary.new_streak,
        }
    }
}
