use crate::error::AppError;
use crate::health::{HealthCheckResult, HealthChecker};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Claims carried by every session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    pub sub: i32, // Database user ID
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

impl AuthClaims {
    pub fn new(user_id: i32, email: impl Into<String>, expires_in_seconds: u64) -> Self {
        let now = Utc::now().timestamp() as usize;
        Self {
            sub: user_id,
            email: email.into(),
            iat: now,
            exp: now + expires_in_seconds as usize,
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as usize;
        self.exp <= now
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp as i64, 0).unwrap_or_else(Utc::now)
    }
}

/// JWT service trait for dependency injection and testing
pub trait JwtService: Send + Sync {
    /// Create a session token from claims
    fn create_token(&self, claims: &AuthClaims) -> Result<String, AppError>;

    /// Verify a session token's signature and expiry and return its claims
    fn validate_token(&self, token: &str) -> Result<AuthClaims, AppError>;
}

#[derive(Clone)]
pub struct JwtServiceImpl {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtServiceImpl {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Create a health checker for this JWT service
    pub fn health_checker(&self) -> Arc<JwtHealthChecker> {
        Arc::new(JwtHealthChecker {
            service: self.clone(),
        })
    }
}

impl JwtService for JwtServiceImpl {
    fn create_token(&self, claims: &AuthClaims) -> Result<String, AppError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn validate_token(&self, token: &str) -> Result<AuthClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<AuthClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(token_data.claims)
    }
}

/// Health checker implementation for JWT service
pub struct JwtHealthChecker {
    service: JwtServiceImpl,
}

#[async_trait::async_trait]
impl HealthChecker for JwtHealthChecker {
    fn name(&self) -> &str {
        "jwt"
    }

    async fn check(&self) -> HealthCheckResult {
        // Round-trip a short-lived token through the service
        let test_claims = AuthClaims::new(1, "health@localhost", 60);

        match self.service.create_token(&test_claims) {
            Ok(token) => match self.service.validate_token(&token) {
                Ok(validated_claims) if validated_claims.sub == test_claims.sub => {
                    HealthCheckResult::healthy_with_details(serde_json::json!({
                        "token_creation": "success",
                        "token_validation": "success"
                    }))
                }
                Ok(_) => HealthCheckResult::unhealthy_with_details(
                    "Token validation returned incorrect claims".to_string(),
                    serde_json::json!({
                        "token_creation": "success",
                        "token_validation": "failed",
                        "error": "claims mismatch"
                    }),
                ),
                Err(err) => HealthCheckResult::unhealthy_with_details(
                    "Failed to validate test JWT token".to_string(),
                    serde_json::json!({
                        "token_creation": "success",
                        "token_validation": "failed",
                        "error": err.to_string()
                    }),
                ),
            },
            Err(err) => HealthCheckResult::unhealthy_with_details(
                "Failed to create test JWT token".to_string(),
                serde_json::json!({
                    "token_creation": "failed",
                    "error": err.to_string()
                }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = AuthClaims::new(1, "test@example.com", 3600);

        assert_eq!(claims.sub, 1);
        assert_eq!(claims.email, "test@example.com");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_token_round_trip() {
        let service = JwtServiceImpl::new("test-secret");

        let claims = AuthClaims::new(42, "test@example.com", 3600);
        let token = service.create_token(&claims).unwrap();
        assert!(!token.is_empty());

        let validated = service.validate_token(&token).unwrap();
        assert_eq!(validated.sub, 42);
        assert_eq!(validated.email, "test@example.com");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtServiceImpl::new("test-secret");

        let mut claims = AuthClaims::new(1, "test@example.com", 3600);
        claims.exp = (Utc::now().timestamp() - 3600) as usize;
        assert!(claims.is_expired());

        let token = service.create_token(&claims).unwrap();
        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let service = JwtServiceImpl::new("test-secret");
        let other = JwtServiceImpl::new("other-secret");

        let claims = AuthClaims::new(1, "test@example.com", 3600);
        let token = service.create_token(&claims).unwrap();

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtServiceImpl::new("test-secret");
        assert!(service.validate_token("not.a.token").is_err());
    }
}
