//! Access and refresh tokens.
//!
//! Access tokens are short-lived HS256 JWTs. Refresh tokens are opaque UUIDs
//! stored only as a SHA-256 digest in `user_sessions`.

use goldleaf_core::roles::Role;
use goldleaf_core::types::DbId;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id.
    pub sub: DbId,
    /// Role at issue time, for clients deciding what to show. Request guards
    /// read the current role from the database instead.
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET` (required), `JWT_ACCESS_EXPIRY_MINS` (default 30)
    /// and `JWT_REFRESH_EXPIRY_DAYS` (default 14).
    ///
    /// # Panics
    ///
    /// On a missing or empty secret, or a non-numeric lifetime.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            access_token_expiry_mins: env_i64("JWT_ACCESS_EXPIRY_MINS", 30),
            refresh_token_expiry_days: env_i64("JWT_REFRESH_EXPIRY_DAYS", 14),
        }
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }
}

fn env_i64(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an integer, got '{raw}'")),
        Err(_) => default,
    }
}

/// Sign an access token for `user_id`.
pub fn issue_access_token(
    user_id: DbId,
    role: Role,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        sub: user_id,
        role,
        iat,
        exp: iat + config.access_ttl_secs(),
        jti: Uuid::new_v4().to_string(),
    };
    jsonwebtoken::encode(&Header::default(), &claims, &config.encoding_key())
}

/// Check signature and expiry, returning the claims.
pub fn decode_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
    jsonwebtoken::decode::<AccessClaims>(token, &config.decoding_key(), &Validation::default())
        .map(|data| data.claims)
}

/// A new refresh token: the plaintext goes to the client, the hash to the
/// session row.
pub struct RefreshToken {
    pub plaintext: String,
    pub hash: String,
}

impl RefreshToken {
    pub fn generate() -> Self {
        let plaintext = Uuid::new_v4().to_string();
        let hash = hash_refresh_token(&plaintext);
        Self { plaintext, hash }
    }
}

/// Hex SHA-256 of a refresh token, the form sessions are looked up by.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 30,
            refresh_token_expiry_days: 14,
        }
    }

    #[test]
    fn issued_token_decodes_to_same_user() {
        let config = config("goldleaf-test-secret");
        let token = issue_access_token(42, Role::BlogAuthor, &config).unwrap();

        let claims = decode_access_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::BlogAuthor);
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = config("goldleaf-test-secret");
        // Well past the default 60 s leeway.
        let iat = chrono::Utc::now().timestamp() - 3600;
        let claims = AccessClaims {
            sub: 1,
            role: Role::User,
            iat,
            exp: iat + 60,
            jti: "stale".into(),
        };
        let token =
            jsonwebtoken::encode(&Header::default(), &claims, &config.encoding_key()).unwrap();

        assert!(decode_access_token(&token, &config).is_err());
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let token = issue_access_token(1, Role::Admin, &config("first-secret")).unwrap();
        assert!(decode_access_token(&token, &config("second-secret")).is_err());
    }

    #[test]
    fn role_claim_uses_role_name() {
        let config = config("goldleaf-test-secret");
        let token = issue_access_token(7, Role::BlogAuthor, &config).unwrap();

        let raw = jsonwebtoken::decode::<serde_json::Value>(
            &token,
            &config.decoding_key(),
            &Validation::default(),
        )
        .unwrap()
        .claims;
        assert_eq!(raw["role"], "blog_author");
    }

    #[test]
    fn refresh_token_hash_is_stable_hex() {
        let token = RefreshToken::generate();
        assert_eq!(token.hash, hash_refresh_token(&token.plaintext));
        assert_eq!(token.hash.len(), 64);
        assert_ne!(token.plaintext, RefreshToken::generate().plaintext);
    }
}
