use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::time::Duration;

use super::model::{AuthenticatedUser, Claims};
use crate::core::error::AppError;
use crate::features::access::Role;

/// Resolves bearer tokens into principals.
///
/// Tokens are HS256 JWTs signed with the secret shared with the identity
/// service. The `sub` claim is the numeric user id and `role` one of the
/// known roles; anything else is rejected.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Auth(format!("Invalid subject claim: {}", claims.sub)))?;

        let role = claims.role.parse::<Role>().map_err(AppError::Auth)?;

        Ok(AuthenticatedUser::new(user_id, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token_for(sub: &str, role: &str, secret: &str) -> String {
        let exp = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as u64;
        let claims = Claims {
            sub: sub.to_string(),
            role: role.to_string(),
            exp,
            iat: None,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn validator() -> JwtValidator {
        JwtValidator::new(SECRET, Duration::from_secs(0))
    }

    #[test]
    fn test_valid_token_yields_principal() {
        let token = token_for("3", "quality_officer", SECRET);
        let user = validator().validate_token(&token).unwrap();
        assert_eq!(user, AuthenticatedUser::new(3, Role::QualityOfficer));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = token_for("3", "admin", "another-secret");
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let token = token_for("3", "superuser", SECRET);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let token = token_for("abc", "admin", SECRET);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let claims = Claims {
            sub: "1".to_string(),
            role: "admin".to_string(),
            exp: 1_000,
            iat: None,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(validator().validate_token(&token).is_err());
    }
}
