//! DTOs for user endpoints.

use serde::Serialize;

use crate::domain::entities::UserId;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
}
