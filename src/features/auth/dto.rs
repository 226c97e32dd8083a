use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::AuthenticatedUser;
use crate::features::access::{can_assign, can_create_complaint_or_photo, can_validate, Role};

/// DTO for /auth/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub user_id: i64,
    pub role: Role,
    pub can_assign: bool,
    pub can_validate: bool,
    pub can_create_complaint_or_photo: bool,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id,
            role: user.role,
            can_assign: can_assign(user.role),
            can_validate: can_validate(user.role),
            can_create_complaint_or_photo: can_create_complaint_or_photo(user.role),
        }
    }
}
