use crate::model::repo::ResourceTyped;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{ModelManager, StoreError, error::StoreResult, repo::CrudRepository};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserEntity {
    id: String,
    username: String,
    #[serde(skip)]
    password: String,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserEntityCreate {
    pub username: String,
    pub password: String,
}

impl ResourceTyped for UserEntity {
    fn get_resource_type() -> crate::model::repo::ResourceType {
        crate::model::repo::ResourceType::User
    }
}

impl UserEntity {
    pub(crate) fn demo(id: &str) -> Self {
        Self {
            id: id.to_string(),
            username: String::from("demo"),
            password: String::from("demo"),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn credential(&self) -> &str {
        &self.password
    }
}

#[async_trait]
impl CrudRepository<UserEntity, UserEntityCreate, String> for UserEntity {
    async fn create(mm: &ModelManager, data: UserEntityCreate) -> StoreResult<Self> {
        let mut users = mm.store().users().write().await;
        if users.values().any(|u| u.username == data.username) {
            return Err(StoreError::UsernameTaken(data.username));
        }

        let user = UserEntity {
            id: Uuid::new_v4().to_string(),
            username: data.username,
            password: data.password,
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_key(mm: &ModelManager, id: &String) -> StoreResult<Option<Self>> {
        let users = mm.store().users().read().await;
        Ok(users.get(id).cloned())
    }

    async fn list(mm: &ModelManager) -> StoreResult<Vec<Self>> {
        let users = mm.store().users().read().await;
        Ok(users.values().cloned().collect())
    }
}

impl UserEntity {
    pub async fn find_by_id(mm: &ModelManager, id: &str) -> StoreResult<Option<Self>> {
        Self::find_by_key(mm, &id.to_string()).await
    }

    pub async fn find_by_username(mm: &ModelManager, username: &str) -> StoreResult<Option<Self>> {
        let users = mm.store().users().read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::MemoryStore;

    #[tokio::test]
    async fn create_and_lookup() {
        let mm = ModelManager::new(MemoryStore::with_demo_user("demo-user"));

        let created = UserEntity::create(
            &mm,
            UserEntityCreate {
                username: String::from("ana"),
                password: String::from("hunter2"),
            },
        )
        .await
        .unwrap();

        let by_id = UserEntity::find_by_id(&mm, created.id()).await.unwrap().unwrap();
        assert_eq!(by_id.username(), "ana");

        let by_name = UserEntity::find_by_username(&mm, "demo").await.unwrap().unwrap();
        assert_eq!(by_name.id(), "demo-user");
        assert_eq!(UserEntity::count(&mm).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let mm = ModelManager::new(MemoryStore::with_demo_user("demo-user"));
        let result = UserEntity::create(
            &mm,
            UserEntityCreate {
                username: String::from("demo"),
                password: String::from("x"),
            },
        )
        .await;

        assert!(matches!(result, Err(StoreError::UsernameTaken(name)) if name == "demo"));
    }

    #[test]
    fn credential_never_serialized() {
        let json = serde_json::to_string(&UserEntity::demo("demo-user")).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"username\":\"demo\""));
    }
}
