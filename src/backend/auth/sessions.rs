/**
 * Session Tokens
 *
 * Signed, self-contained session tokens. The token is the whole session
 * record: the server keeps no session table, so a token stays valid until
 * it expires.
 *
 * Signing goes through the `TokenSigner` trait; `HmacSigner` is the HS256
 * implementation backed by `jsonwebtoken`.
 */

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Admin identity carried inside a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Admin ID
    pub sub: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Identity embedded in the claims
    pub fn identity(&self) -> Result<AdminIdentity, SessionError> {
        let id = Uuid::parse_str(&self.sub).map_err(|_| SessionError::Malformed)?;
        Ok(AdminIdentity {
            id,
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
        })
    }
}

/// Why a token was refused
///
/// Kept distinct for logging; the HTTP boundary answers all of them the
/// same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Signing strategy for session tokens
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &SessionClaims) -> Result<String, SessionError>;

    /// Check integrity and expiry and return the claims
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError>;
}

/// HS256 signer over a shared secret
pub struct HmacSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl HmacSigner {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenSigner for HmacSigner {
    fn sign(&self, claims: &SessionClaims) -> Result<String, SessionError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| SessionError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => SessionError::InvalidSignature,
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Malformed,
            })
    }
}

/// Issues and verifies session tokens with a fixed lifetime
#[derive(Clone)]
pub struct SessionManager {
    signer: Arc<dyn TokenSigner>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(signer: Arc<dyn TokenSigner>, ttl: Duration) -> Self {
        Self { signer, ttl }
    }

    /// HS256 manager for `secret`
    pub fn hmac(secret: &str, ttl: Duration) -> Self {
        Self::new(Arc::new(HmacSigner::new(secret.as_bytes())), ttl)
    }

    /// Token lifetime; also the cookie Max-Age
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid from now
    pub fn issue(&self, identity: &AdminIdentity) -> Result<String, SessionError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if at `issued_at`
    pub fn issue_at(
        &self,
        identity: &AdminIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, SessionError> {
        let iat = issued_at.timestamp();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|lifetime| iat.checked_add(lifetime))
            .ok_or_else(|| SessionError::Signing("token lifetime out of range".to_string()))?;
        let claims = SessionClaims {
            sub: identity.id.to_string(),
            first_name: identity.first_name.clone(),
            middle_name: identity.middle_name.clone(),
            last_name: identity.last_name.clone(),
            iat,
            exp,
        };
        self.signer.sign(&claims)
    }

    /// Verify a token and return the identity it carries
    pub fn verify(&self, token: &str) -> Result<AdminIdentity, SessionError> {
        self.signer.verify(token)?.identity()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
