use std::sync::Arc;
use std::time::Duration;

use crate::Config;
use crate::lessons::error::{GenerationError, GenerationResult};
use crate::lessons::{FallbackCatalog, GeminiGenerator, GenerationRequest, LessonGenerator};
use crate::model::entity::{Language, Lesson, QUESTIONS_PER_LESSON, Question};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct LessonResolver {
    generator: Option<Arc<dyn LessonGenerator>>,
    fallback: Arc<FallbackCatalog>,
    timeout: Duration,
}

impl Default for LessonResolver {
    fn default() -> Self {
        Self::fallback_only()
    }
}

impl LessonResolver {
    pub fn fallback_only() -> Self {
        Self {
            generator: None,
            fallback: Arc::new(FallbackCatalog::builtin()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_generator(generator: Arc<dyn LessonGenerator>, timeout: Duration) -> Self {
        Self {
            generator: Some(generator),
            timeout,
            ..Self::fallback_only()
        }
    }

    pub fn with_catalog(mut self, catalog: FallbackCatalog) -> Self {
        self.fallback = Arc::new(catalog);
        self
    }

    pub fn from_config(config: &Config) -> GenerationResult<Self> {
        match config.generation() {
            Some(generation) => {
                tracing::info!(model = generation.model(), "dynamic lesson generation enabled");
                let generator = GeminiGenerator::from_config(generation)?;
                Ok(Self::with_generator(Arc::new(generator), generation.timeout()))
            }
            None => {
                tracing::info!("dynamic lesson generation disabled, serving fallback lessons");
                Ok(Self::fallback_only())
            }
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.generator.is_some()
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, language: Language, level: u32, lesson_number: u32) -> Vec<Question> {
        let request = GenerationRequest {
            language,
            level,
            lesson_number,
        };

        match self.try_generate(&request).await {
            Ok(questions) => questions,
            Err(GenerationError::Disabled) => self.fallback(language),
            Err(e) => {
                tracing::warn!(error = %e, "lesson generation failed, using fallback lesson");
                self.fallback(language)
            }
        }
    }

    pub async fn resolve_named(&self, language: &str, level: u32, lesson_number: u32) -> Vec<Question> {
        let language = language.parse::<Language>().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unsupported language, using {}", Language::DEFAULT);
            Language::DEFAULT
        });
        self.resolve(language, level, lesson_number).await
    }

    pub async fn lesson(&self, language: Language, lesson_number: u32) -> Lesson {
        let level = Lesson::level_for(lesson_number);
        let questions = self.resolve(language, level, lesson_number).await;
        Lesson::new(language, lesson_number, questions)
    }

    async fn try_generate(&self, request: &GenerationRequest) -> GenerationResult<Vec<Question>> {
        let generator = self.generator.as_ref().ok_or(GenerationError::Disabled)?;

        let questions = tokio::time::timeout(self.timeout, generator.generate(request))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))??;

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

    fn fallback(&self, language: Language) -> Vec<Question> {
        self.fallback.questions(language).to_vec()
    }
}
