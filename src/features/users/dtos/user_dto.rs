use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::access::Role;
use crate::features::users::models::User;
use crate::shared::validation::EXPO_PUSH_TOKEN_REGEX;

/// Response DTO for user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            avatar: u.avatar,
        }
    }
}

/// Request DTO for registering the caller's device push token
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePushTokenDto {
    #[validate(regex(path = *EXPO_PUSH_TOKEN_REGEX, message = "Invalid Expo push token"))]
    pub expo_push_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_token_validation() {
        let valid = UpdatePushTokenDto {
            expo_push_token: "ExponentPushToken[abc123]".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = UpdatePushTokenDto {
            expo_push_token: "not-a-token".to_string(),
        };
        assert!(invalid.validate().is_err());
    }
}
