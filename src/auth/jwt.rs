use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::settings::AuthSettings;

use super::AuthError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

pub fn create_access_token(username: &str, settings: &AuthSettings) -> Result<String, AuthError> {
    let expires_at = Utc::now() + chrono::Duration::minutes(settings.token_expire_minutes);
    let claims = Claims {
        sub: username.to_string(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.token_secret.as_bytes()),
    )
    .map_err(|err| AuthError::TokenCreation(err.to_string()))
}

pub fn decode_access_token(token: &str, settings: &AuthSettings) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.token_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> AuthSettings {
        AuthSettings {
            token_secret: "unit-test-secret".to_string(),
            token_expire_minutes: 30,
            // bcrypt's minimum cost; the constant is private in the bcrypt crate.
            bcrypt_cost: 4,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let settings = test_settings();

        let token = create_access_token("alice", &settings).unwrap();
        let claims = decode_access_token(&token, &settings).unwrap();

        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let settings = AuthSettings {
            token_expire_minutes: -5,
            ..test_settings()
        };

        let token = create_access_token("alice", &settings).unwrap();
        assert!(matches!(
            decode_access_token(&token, &settings),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let settings = test_settings();
        let other = AuthSettings {
            token_secret: "a-different-secret".to_string(),
            ..test_settings()
        };

        let token = create_access_token("alice", &other).unwrap();
        assert!(matches!(
            decode_access_token(&token, &settings),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            decode_access_token("not-a-token", &test_settings()),
            Err(AuthError::InvalidToken)
        ));
    }
}
