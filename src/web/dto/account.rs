use serde::Serialize;

use crate::model::entity::UserEntity;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AccountResponse {
    id: String,
    username: String,
}

impl From<UserEntity> for AccountResponse {
    fn from(user: UserEntity) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}
