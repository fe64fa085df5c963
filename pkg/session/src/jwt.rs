use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use serde_json::Value;

/// Claims carried by the session JWT.
///
/// Only `id` is consumed here; issuers may attach more claims and they are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtPayload {
    /// The subject identifier of the authenticated user.
    ///
    /// Kept loosely typed: a misbehaving issuer can put a number here, and
    /// callers must reject that instead of coercing it to a string.
    pub id: Option<Value>,

    /// Expiration time (UNIX timestamp).
    pub exp: Option<u64>,

    /// Issued-at time (UNIX timestamp).
    pub iat: Option<u64>,
}

impl JwtPayload {
    /// Returns the user id claim if it is present and a string.
    pub fn string_id(&self) -> Option<&str> {
        self.id.as_ref()?.as_str()
    }
}

/// Decodes session JWT payloads signed with an HS256 secret.
#[derive(Clone)]
pub struct JwtDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtDecoder {
    /// Creates a decoder from a raw HS256 secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Creates a decoder with the secret from the `SESSION_JWT_SECRET`
    /// environment variable.
    ///
    /// # Errors
    /// - `SESSION_JWT_SECRET` is not set
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        let secret = std::env::var("SESSION_JWT_SECRET").map_err(|_| Error::MissingSecret)?;
        Ok(Self::new(secret.as_bytes()))
    }

    /// Decodes the payload of a session token.
    ///
    /// # Errors
    /// - the token is malformed, expired or signed with a different key
    pub fn decode_payload(&self, token: &str) -> Result<JwtPayload, Error> {
        let data = decode::<JwtPayload>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Session token errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("missing SESSION_JWT_SECRET")]
    MissingSecret,

    #[error("failed to decode session token: {0}")]
    DecodeToken(#[from] jsonwebtoken::errors::Error),
}
