use crate::model::entity::Language;
use crate::model::repo::ResourceTyped;
use crate::model::{ModelManager, ProgressKey, error::StoreResult, repo::CrudRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    id: Uuid,
    user_id: String,
    language: Language,
    current_level: u32,
    xp: u32,
    streak: u32,
    last_practice_date: Option<DateTime<Utc>>,
    completed_lessons: Vec<u32>,
}

impl ResourceTyped for UserProgress {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::UserProgress
    }
}

impl UserProgress {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_practice_date(&self) -> Option<DateTime<Utc>> {
        self.last_practice_date
    }

    pub fn completed_lessons(&self) -> &[u32] {
        &self.completed_lessons
    }

    pub fn key(&self) -> ProgressKey {
        ProgressKey::new(self.user_id.clone(), self.language)
    }

    pub(crate) fn mark_completed(&mut self, lesson_number: u32) -> bool {
        if self.completed_lessons.contains(&lesson_number) {
            return false;
        }
        self.completed_lessons.push(lesson_number);
        true
    }

    pub(crate) fn record_practice(
        &mut self,
        xp: u32,
        level: u32,
        streak: u32,
        practiced_at: DateTime<Utc>,
    ) {
        self.xp = xp;
        self.current_level = level;
        self.streak = streak;
        self.last_practice_date = Some(practiced_at);
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserProgressCreate {
    pub user_id: String,
    pub language: Language,
    pub current_level: Option<u32>,
    pub xp: Option<u32>,
    pub streak: Option<u32>,
    pub last_practice_date: Option<DateTime<Utc>>,
    pub completed_lessons: Vec<u32>,
}

impl UserProgressCreate {
    pub fn zero<S: Into<String>>(user_id: S, language: Language) -> Self {
        Self {
            user_id: user_id.into(),
            language,
            ..Default::default()
        }
    }
}

#[async_trait]
impl CrudRepository<UserProgress, UserProgressCreate, ProgressKey> for UserProgress {
    async fn create(mm: &ModelManager, data: UserProgressCreate) -> StoreResult<Self> {
        let mut completed_lessons: Vec<u32> = Vec::with_capacity(data.completed_lessons.len());
        for lesson in data.completed_lessons {
            if !completed_lessons.contains(&lesson) {
                completed_lessons.push(lesson);
            }
        }

        let progress = UserProgress {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            language: data.language,
            current_level: data.current_level.filter(|lvl| *lvl > 0).unwrap_or(1),
            xp: data.xp.unwrap_or(0),
            streak: data.streak.unwrap_or(0),
            last_practice_date: data.last_practice_date,
            completed_lessons,
        };

        // last write wins on the composite key
        mm.store()
            .progress()
            .write()
            .await
            .insert(progress.key(), progress.clone());

        Ok(progress)
    }

    async fn find_by_key(mm: &ModelManager, key: &ProgressKey) -> StoreResult<Option<Self>> {
        let table = mm.store().progress().read().await;
        Ok(table.get(key).cloned())
    }

    async fn list(mm: &ModelManager) -> StoreResult<Vec<Self>> {
        let table = mm.store().progress().read().await;
        Ok(table.values().cloned().collect())
    }
}

impl UserProgress {
    pub async fn find(
        mm: &ModelManager,
        user_id: &str,
        language: Language,
    ) -> StoreResult<Option<Self>> {
        Self::find_by_key(mm, &ProgressKey::new(user_id, language)).await
    }

    pub async fn find_or_create(
        mm: &ModelManager,
        user_id: &str,
        language: Language,
    ) -> StoreResult<Self> {
        match Self::find(mm, user_id, language).await? {
            Some(progress) => Ok(progress),
            None => {
                tracing::debug!(user_id, %language, "creating zero-state progress");
                Self::create(mm, UserProgressCreate::zero(user_id, language)).await
            }
        }
    }

    pub async fn update(self, mm: &ModelManager) -> StoreResult<Self> {
        mm.store()
            .progress()
            .write()
            .await
            .insert(self.key(), self.clone());
        Ok(self)
    }

    pub async fn list_by_user(mm: &ModelManager, user_id: &str) -> StoreResult<Vec<Self>> {
        let table = mm.store().progress().read().await;
        let mut found: Vec<Self> = table
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by_key(|p| Language::ALL.iter().position(|l| *l == p.language));
        Ok(found)
    }
}
