use serde::{Deserialize, Serialize};

use crate::lessons::check::UserAnswer;
use crate::model::entity::Language;

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerBody {
    pub user_id: String,
    pub language: Language,
    pub level: u32,
    pub lesson_number: u32,
    pub question_index: usize,
    pub user_answer: UserAnswer,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LanguageResponse {
    name: Language,
    flag: String,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        let flag = match language {
            Language::Spanish => "🇪🇸",
            Language::French => "🇫🇷",
            Language::Japanese => "🇯🇵",
            Language::German => "🇩🇪",
            Language::Korean => "🇰🇷",
            Language::English => "🇬🇧",
        };
        Self {
            name: language,
            flag: flag.to_string(),
        }
    }
}
