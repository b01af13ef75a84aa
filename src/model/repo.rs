use crate::model::{ModelManager, error::StoreResult};

#[derive(Debug, Clone)]
pub enum ResourceType {
    User,
    Language,
    Lesson,
    Answer,
    UserProgress,
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

#[async_trait::async_trait]
pub trait CrudRepository<T, Create, K>
where
    T: ResourceTyped,
    K: Send + Sync,
{
    async fn create(mm: &ModelManager, data: Create) -> StoreResult<T>;

    async fn find_by_key(mm: &ModelManager, key: &K) -> StoreResult<Option<T>>;

    async fn list(mm: &ModelManager) -> StoreResult<Vec<T>>;

    async fn count(mm: &ModelManager) -> StoreResult<usize> {
        Ok(Self::list(mm).await?.len())
    }
}
