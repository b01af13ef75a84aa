use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Generation;
use crate::lessons::Difficulty;
use crate::lessons::error::{GenerationError, GenerationResult};
use crate::model::entity::{Language, QUESTIONS_PER_LESSON, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub language: Language,
    pub level: u32,
    pub lesson_number: u32,
}

impl GenerationRequest {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::for_level(self.level)
    }
}

#[async_trait]
pub trait LessonGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<Vec<Question>>;
}

#[derive(Clone)]
pub struct GeminiGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiGenerator {
    pub fn from_config(config: &Generation) -> GenerationResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            model: config.model().to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl LessonGenerator for GeminiGenerator {
    #[tracing::instrument(skip(self))]
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<Vec<Question>> {
        let payload = GenerateContentRequest {
            system_instruction: Content::text(system_prompt(request)),
            contents: vec![Content::text(format!(
                "Generate a lesson for {}, Level {}, Lesson {}.",
                request.language, request.level, request.lesson_number
            ))],
            generation_config: GenerationConfig::json(),
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        parse_questions(&text)
    }
}

fn system_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You write short, engaging lessons for people learning {language}.
Write exactly {count} questions for a {difficulty} lesson (Level {level}, Lesson {lesson}):
2 multiple choice questions with 4 choices each, 2 fill-in-the-blank questions with 1-2 blanks
marked as "_____", and 1 translation question.

Answer with a JSON array only. Each element is one of:
{{"type":"multiple_choice","question":"...","instruction":"...","choices":["..."],"correctAnswer":0,"explanation":"..."}}
{{"type":"fill_blank","question":"...","instruction":"...","sentence":"...","blanks":[{{"position":0,"correctAnswer":"..."}}],"explanation":"..."}}
{{"type":"translation","question":"...","instruction":"Translate to {language}","sourceText":"...","correctAnswer":"...","acceptableAnswers":["..."],"explanation":"..."}}
Every question needs a non-empty explanation."#,
        language = request.language,
        count = QUESTIONS_PER_LESSON,
        difficulty = request.difficulty().description(),
        level = request.level,
        lesson = request.lesson_number,
    )
}

/// Accepts exactly [`QUESTIONS_PER_LESSON`] well-formed questions; code fences are tolerated.
pub fn parse_questions(raw: &str) -> GenerationResult<Vec<Question>> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    let questions: Vec<Question> = serde_json::from_str(body.trim())?;

    if questions.len() != QUESTIONS_PER_LESSON {
        return Err(GenerationError::WrongCount {
            expected: QUESTIONS_PER_LESSON,
            got: questions.len(),
        });
    }

    if let Some(index) = questions.iter().position(|q| !q.is_well_formed()) {
        return Err(GenerationError::Malformed(index));
    }

    Ok(questions)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn text(text: String) -> Self {
        Self {
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    fn json() -> Self {
        Self {
            response_mime_type: "application/json",
            response_schema: question_schema(),
        }
    }
}

// `correctAnswer` is an index for multiple choice and a string for translation,
// so it stays out of the schema and is checked by `parse_questions`.
fn question_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "minItems": QUESTIONS_PER_LESSON,
        "maxItems": QUESTIONS_PER_LESSON,
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": {
                    "type": "STRING",
                    "enum": ["multiple_choice", "fill_blank", "translation"],
                },
                "question": { "type": "STRING" },
                "instruction": { "type": "STRING" },
                "choices": { "type": "ARRAY", "items": { "type": "STRING" } },
                "sentence": { "type": "STRING" },
                "blanks": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "position": { "type": "INTEGER" },
                            "correctAnswer": { "type": "STRING" },
                        },
                        "required": ["position", "correctAnswer"],
                    },
                },
                "sourceText": { "type": "STRING" },
                "acceptableAnswers": { "type": "ARRAY", "items": { "type": "STRING" } },
                "explanation": { "type": "STRING" },
            },
            "required": ["type", "question", "instruction", "explanation"],
        },
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
