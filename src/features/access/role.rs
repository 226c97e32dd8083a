use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::str::FromStr;
use utoipa::ToSchema;

/// User role, stored as the `user_role` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Administrative,
    Commercial,
    QualityOfficer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Administrative => "administrative",
            Role::Commercial => "commercial",
            Role::QualityOfficer => "quality_officer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "administrative" => Ok(Role::Administrative),
            "commercial" => Ok(Role::Commercial),
            "quality_officer" => Ok(Role::QualityOfficer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [
            Role::Admin,
            Role::Administrative,
            Role::Commercial,
            Role::QualityOfficer,
        ] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("responsable_qualite".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::QualityOfficer).unwrap();
        assert_eq!(json, "\"quality_officer\"");
    }
}
