use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::clients::dtos::ClientResponseDto;
use crate::features::complaints::models::Complaint;
use crate::features::photos::dtos::PhotoResponseDto;

/// Client name shown alongside a complaint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientSummaryDto {
    pub id: i64,
    pub name: String,
}

/// Response DTO for complaint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintResponseDto {
    pub id: i64,
    pub title: String,
    #[schema(value_type = Object)]
    pub form_data: Option<Value>,
    pub client_id: i64,
    pub client: Option<ClientSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintResponseDto {
    fn from(c: Complaint) -> Self {
        Self {
            id: c.id,
            title: c.title,
            form_data: c.form_data,
            client_id: c.client_id,
            client: None,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Complaint with its client and photos
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintDetailResponseDto {
    pub id: i64,
    pub title: String,
    #[schema(value_type = Object)]
    pub form_data: Option<Value>,
    pub client: ClientResponseDto,
    pub photos: Vec<PhotoResponseDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a complaint
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    /// JSON object, or a string holding JSON
    #[serde(default, alias = "formData")]
    #[schema(value_type = Object)]
    pub form_data: Option<Value>,
    pub client_id: i64,
}

/// Request DTO for updating a complaint. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateComplaintDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    #[serde(default, alias = "formData")]
    #[schema(value_type = Object)]
    pub form_data: Option<Value>,
    pub client_id: Option<i64>,
}

/// Decode `form_data` sent as a JSON-encoded string.
///
/// A string that parses to a non-null JSON value is replaced by that value;
/// any other string is kept as-is. Non-string values pass through.
pub fn normalize_form_data(raw: Value) -> Value {
    match raw {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Null) | Err(_) => Value::String(text),
            Ok(parsed) => parsed,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_decodes_json_strings() {
        let raw = Value::String(r#"{"vehicle":"AB-123","issue":"noise"}"#.to_string());
        assert_eq!(
            normalize_form_data(raw),
            json!({"vehicle": "AB-123", "issue": "noise"})
        );
    }

    #[test]
    fn test_normalize_keeps_plain_strings() {
        let raw = Value::String("customer called twice".to_string());
        assert_eq!(normalize_form_data(raw.clone()), raw);

        let raw = Value::String("null".to_string());
        assert_eq!(normalize_form_data(raw.clone()), raw);
    }

    #[test]
    fn test_normalize_passes_objects_through() {
        let raw = json!({"fields": [1, 2]});
        assert_eq!(normalize_form_data(raw.clone()), raw);
    }

    #[test]
    fn test_create_dto_accepts_camel_case_form_data() {
        let dto: CreateComplaintDto = serde_json::from_value(json!({
            "title": "Brake noise",
            "formData": "{\"axle\":\"front\"}",
            "client_id": 4
        }))
        .unwrap();
        assert_eq!(
            dto.form_data.map(normalize_form_data),
            Some(json!({"axle": "front"}))
        );
    }
}
