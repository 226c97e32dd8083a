use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::access::{self, Capability, Role};

/// Principal resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Check the user's role against the capability table
    pub fn authorize(&self, capability: Capability) -> crate::core::error::Result<()> {
        access::authorize(self.role, capability)
    }
}

/// Claims carried by tokens from the identity service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a decimal string
    pub sub: String,
    pub role: String,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}
