//! JWT token service
//!
//! Validates bearer credentials issued by the identity provider and exposes
//! the resulting `{subject, role}` pair. The order core never issues tokens
//! in request paths; [`JwtService::generate_token`] exists for tests and
//! operational tooling.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: load_jwt_secret(),
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "canteen-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "canteen-clients".to_string()),
        }
    }
}

/// Load the JWT secret from the environment
///
/// In release builds a missing or short `JWT_SECRET` is fatal; development
/// builds fall back to a fixed local-only key.
fn load_jwt_secret() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= 32 => secret,
        Ok(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET shorter than 32 bytes, using development key");
                dev_secret()
            }
            #[cfg(not(debug_assertions))]
            {
                panic!("JWT_SECRET must be at least 32 characters long");
            }
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set, using development key");
                dev_secret()
            }
            #[cfg(not(debug_assertions))]
            {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        }
    }
}

#[cfg(debug_assertions)]
fn dev_secret() -> String {
    "canteen-server-development-only-secret-key".to_string()
}

/// Role carried by a verified credential
///
/// Closed set: any other value in the token is treated as a malformed
/// credential and rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// JWT claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// Role (`user` | `admin`)
    pub role: Role,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service with default configuration
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// Create a new JWT service with the given configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a token for a user
    pub fn generate_token(&self, user_id: &str, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current user context, derived from verified JWT claims
///
/// Created once per request by the auth extractor and passed explicitly
/// into every lifecycle operation.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID (subject)
    pub id: String,
    /// Role
    pub role: Role,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
        }
    }
}

impl CurrentUser {
    /// Whether the user holds the administrator role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-unit-tests-0123456789".to_string(),
            expiration_minutes: 60,
            issuer: "canteen-server".to_string(),
            audience: "canteen-clients".to_string(),
        }
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = JwtService::with_config(test_config());

        let token = service
            .generate_token("user123", Role::User)
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, Role::User);

        let user = CurrentUser::from(claims);
        assert_eq!(user.id, "user123");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_admin_claims_round_trip() {
        let service = JwtService::with_config(test_config());
        let token = service.generate_token("a1", Role::Admin).unwrap();
        let user = CurrentUser::from(service.validate_token(&token).unwrap());
        assert!(user.is_admin());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = JwtConfig {
            // Beyond the default 60s validation leeway
            expiration_minutes: -5,
            ..test_config()
        };
        let service = JwtService::with_config(config);
        let token = service.generate_token("user123", Role::User).unwrap();

        match service.validate_token(&token) {
            Err(JwtError::ExpiredToken) => {}
            other => panic!("Expected ExpiredToken, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::with_config(test_config());
        assert!(service.validate_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = JwtService::with_config(test_config());
        let token = service.generate_token("user123", Role::User).unwrap();

        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-secret-key-xyz-987".to_string(),
            ..test_config()
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
