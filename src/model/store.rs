use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::model::entity::{Language, UserEntity, UserProgress};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    user_id: String,
    language: Language,
}

impl ProgressKey {
    pub fn new<S: Into<String>>(user_id: S, language: Language) -> Self {
        Self {
            user_id: user_id.into(),
            language,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserEntity>>,
    progress: RwLock<HashMap<ProgressKey, UserProgress>>,
    progress_locks: Mutex<HashMap<ProgressKey, Arc<Mutex<()>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_user(user_id: &str) -> Self {
        let mut users = HashMap::new();
        users.insert(user_id.to_string(), UserEntity::demo(user_id));

        Self {
            users: RwLock::new(users),
            ..Default::default()
        }
    }

    pub(crate) fn users(&self) -> &RwLock<HashMap<String, UserEntity>> {
        &self.users
    }

    pub(crate) fn progress(&self) -> &RwLock<HashMap<ProgressKey, UserProgress>> {
        &self.progress
    }

    pub async fn lock_progress(&self, key: &ProgressKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.progress_locks.lock().await;
            // an entry only the map references has no holder and no waiter
            locks.retain(|k, lock| k == key || Arc::strong_count(lock) > 1);
            locks
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn demo_user_is_seeded() {
        let store = MemoryStore::with_demo_user("demo-user");
        let users = store.users().read().await;
        let demo = users.get("demo-user").expect("demo user seeded");
        assert_eq!(demo.username(), "demo");
    }

    #[tokio::test]
    async fn progress_lock_is_per_key() {
        let store = Arc::new(MemoryStore::new());
        let spanish = ProgressKey::new("u1", Language::Spanish);
        let french = ProgressKey::new("u1", Language::French);

        let _held = store.lock_progress(&spanish).await;

        // other keys stay available
        let other = tokio::time::timeout(Duration::from_millis(200), store.lock_progress(&french)).await;
        assert!(other.is_ok());

        // same key blocks while held
        let same = tokio::time::timeout(Duration::from_millis(50), store.lock_progress(&spanish)).await;
        assert!(same.is_err());
    }

    #[tokio::test]
    async fn idle_progress_locks_are_dropped() {
        let store = MemoryStore::new();
        let spanish = ProgressKey::new("u1", Language::Spanish);
        let french = ProgressKey::new("u2", Language::French);
        let korean = ProgressKey::new("u3", Language::Korean);

        drop(store.lock_progress(&spanish).await);
        let held = store.lock_progress(&french).await;
        assert_eq!(store.progress_locks.lock().await.len(), 1);

        // a held key survives pruning
        let _other = store.lock_progress(&korean).await;
        assert_eq!(store.progress_locks.lock().await.len(), 2);

        drop(held);
        let again = tokio::time::timeout(Duration::from_millis(200), store.lock_progress(&french)).await;
        assert!(again.is_ok());
    }
}
