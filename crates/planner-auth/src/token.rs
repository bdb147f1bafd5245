//! Session tokens (JWT) with a fixed 7-day expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use planner_models::{Role, User};

use crate::error::Result;

/// Days a session token stays valid. No refresh mechanism exists.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Role of the user at login time.
    pub role: Role,
    /// Expiration as a UTC timestamp.
    pub exp: usize,
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: String,
}

impl TokenSigner {
    /// Creates a signer with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issues a token for the user, expiring in [`TOKEN_TTL_DAYS`] days.
    pub fn issue(&self, user: &User) -> Result<String> {
        let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role,
            exp,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Verifies a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> User {
        User::new("Ada", "ada@example.com", "hash", Role::Admin)
    }

    #[test]
    fn test_issue_and_verify() {
        let signer = TokenSigner::new("test-secret");
        let user = make_user();

        let token = signer.issue(&user).unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_expiry_is_seven_days_out() {
        let signer = TokenSigner::new("test-secret");
        let token = signer.issue(&make_user()).unwrap();
        let claims = signer.verify(&token).unwrap();

        let expected = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
        // Within a minute of the expected expiry
        assert!(claims.exp.abs_diff(expected) < 60);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenSigner::new("secret-a").issue(&make_user()).unwrap();

        let result = TokenSigner::new("secret-b").verify(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let signer = TokenSigner::new("test-secret");
        assert!(signer.verify("not.a.token").is_err());
    }
}
