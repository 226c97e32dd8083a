use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::clients::models::Client;
use crate::shared::validation::PHONE_REGEX;

/// Response DTO for client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientResponseDto {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Client> for ClientResponseDto {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            address: c.address,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request DTO for creating a client
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClientDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

/// Request DTO for updating a client. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateClientDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_validation() {
        let dto = CreateClientDto {
            name: "Garage Atlas".to_string(),
            email: Some("contact@atlas.ma".to_string()),
            phone: Some("+212 5 22 12 34 56".to_string()),
            address: None,
        };
        assert!(dto.validate().is_ok());

        let dto = CreateClientDto {
            name: String::new(),
            email: Some("not-an-email".to_string()),
            phone: Some("phone".to_string()),
            address: None,
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_update_client_allows_empty_body() {
        assert!(UpdateClientDto::default().validate().is_ok());
    }
}
