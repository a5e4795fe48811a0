use crate::error::CompassError;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    pub exp: usize, // Expiration timestamp
}

/// Issues and verifies HS256 bearer tokens. No refresh mechanism; clients
/// re-login after expiry.
pub struct TokenIssuer {
    secret: String,
    expiry_secs: u64,
}

impl TokenIssuer {
    pub fn new(secret: String, expiry_secs: u64) -> Self {
        TokenIssuer { secret, expiry_secs }
    }

    pub fn issue(&self, email: &str) -> Result<String, CompassError> {
        let expiration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as usize + self.expiry_secs as usize)
            .map_err(|e| CompassError::InternalServerError(format!("Time error: {}", e)))?;

        let claims = Claims {
            email: email.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| CompassError::InternalServerError(format!("JWT encoding error: {}", e)))
    }

    /// Rejects expired or otherwise invalid tokens uniformly. Zero leeway: a
    /// token is refused the second its expiry passes.
    pub fn verify(&self, token: &str) -> Result<Claims, CompassError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| CompassError::InvalidCredentials)?;

        Ok(token_data.claims)
    }
}
