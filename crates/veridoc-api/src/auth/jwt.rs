//! HS256 JWT issuance and validation with a shared signing secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use veridoc_core::AppError;

use crate::auth::models::JwtClaims;

/// JWT service holding the shared secret. Tokens are time-bounded; the
/// default expiry is one hour from issuance.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Issue a bearer token for a verified identity.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Validate a bearer token and return its claims. Pure check; mutates
    /// nothing.
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                tracing::debug!("JWT validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::Unauthorized("Token has expired".to_string())
                    }
                    _ => AppError::Unauthorized("Token is not valid".to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate_round_trip() {
        let service = JwtService::new("test-secret", 1);
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::new("test-secret", 1);
        let err = service.validate_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtService::new("secret-a", 1);
        let verifier = JwtService::new("secret-b", 1);

        let token = issuer.issue_token(Uuid::new_v4()).unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Issue with a negative expiry so the token is already expired.
        let service = JwtService::new("test-secret", -1);
        let token = service.issue_token(Uuid::new_v4()).unwrap();

        let err = service.validate_token(&token).unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert!(msg.contains("expired")),
            _ => panic!("Expected Unauthorized"),
        }
    }
}
