use crate::leveling::error::{CompletionError, CompletionResult};
use crate::leveling::{level_for_xp, next_streak, xp_for_accuracy};
use crate::model::entity::{Language, UserProgress};
use crate::model::{ModelManager, ProgressKey};
use crate::utils::clock::Clock;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub user_id: String,
    pub language: Language,
    pub level: u32,
    pub lesson_number: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSummary {
    pub xp_earned: u32,
    pub new_xp: u32,
    pub new_level: u32,
    pub leveled_up: bool,
    pub new_streak: u32,
}

impl CompletionRequest {
    pub fn validate(&self) -> CompletionResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(CompletionError::invalid("userId must not be empty"));
        }
        if self.total_questions == 0 {
            return Err(CompletionError::invalid("totalQuestions must be greater than 0"));
        }
        if self.correct_answers > self.total_questions {
            return Err(CompletionError::invalid(format!(
                "correctAnswers ({}) exceeds totalQuestions ({})",
                self.correct_answers, self.total_questions
            )));
        }
        if self.lesson_number == 0 {
            return Err(CompletionError::invalid("lessonNumber must be at least 1"));
        }
        if self.level == 0 {
            return Err(CompletionError::invalid("level must be at least 1"));
        }
        Ok(())
    }
}

// "now" is read under the per-key lock so stored practice dates follow lock order.
#[tracing::instrument(skip(mm, req, clock), fields(user_id = %req.user_id, language = %req.language, lesson = req.lesson_number))]
pub async fn complete(
    mm: &ModelManager,
    req: &CompletionRequest,
    clock: &dyn Clock,
) -> CompletionResult<CompletionSummary> {
    req.validate()?;

    let key = ProgressKey::new(req.user_id.clone(), req.language);
    let _guard = mm.store().lock_progress(&key).await;
    let now = clock.now();

    let mut progress = UserProgress::find_or_create(mm, &req.user_id, req.language).await?;
    let old_level = progress.current_level();

    let xp_earned = xp_for_accuracy(req.correct_answers, req.total_questions);
    let new_xp = progress.xp().saturating_add(xp_earned);
    let new_level = level_for_xp(new_xp);

    let last_day = progress.last_practice_date().map(|at| at.date_naive());
    let new_streak = next_streak(progress.streak(), last_day, now.date_naive());

    progress.mark_completed(req.lesson_number);
    progress.record_practice(new_xp, new_level, new_streak, now);
    let saved = progress.update(mm).await?;

    let summary = CompletionSummary {
        xp_earned,
        new_xp: saved.xp(),
        new_level: saved.current_level(),
        leveled_up: saved.current_level() > old_level,
        new_streak: saved.streak(),
    };

    tracing::debug!(?summary, "lesson completed");
    Ok(summary)
}
