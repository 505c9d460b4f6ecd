//! JWKS-backed verifier for identity-provider ID tokens.
//!
//! Validates bearer tokens by:
//!
//! 1. Fetching the provider's public keys (cached with a TTL)
//! 2. Checking the signature against the key named by the token's `kid`
//! 3. Checking issuer, audience, and expiry claims
//! 4. Mapping claims to a domain [`Principal`]
//!
//! # Example
//!
//! ```ignore
//! use clubhub::adapters::auth::{JwksConfig, JwksTokenVerifier};
//! use clubhub::ports::TokenVerifier;
//!
//! let config = JwksConfig::new(
//!     "https://securetoken.google.com/clubhub",
//!     "clubhub",
//!     "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com",
//! );
//! let verifier = JwksTokenVerifier::new(config)?;
//! let principal = verifier.verify("eyJ...").await?;
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
    decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, Email, Principal};
use crate::ports::TokenVerifier;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Configuration for [`JwksTokenVerifier`].
#[derive(Debug, Clone)]
pub struct JwksConfig {
    /// Expected `iss` claim.
    pub issuer: String,

    /// Expected `aud` claim.
    pub audience: String,

    /// Where the provider publishes its signing keys.
    pub jwks_url: String,

    /// How long fetched keys are reused. Defaults to 1 hour.
    pub cache_ttl: Option<Duration>,
}

impl JwksConfig {
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        jwks_url: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            jwks_url: jwks_url.into(),
            cache_ttl: None,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }
}

impl From<&AuthConfig> for JwksConfig {
    fn from(config: &AuthConfig) -> Self {
        JwksConfig::new(&config.issuer, &config.audience, &config.jwks_url)
            .with_cache_ttl(config.jwks_cache_ttl())
    }
}

/// ID token claims. Providers add more; only these are read.
#[derive(Debug, Serialize, Deserialize)]
struct IdTokenClaims {
    sub: String,

    iss: String,

    #[serde(default)]
    aud: Audience,

    exp: i64,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    picture: Option<String>,
}

/// Audience can be a single string or array of strings in JWTs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
enum Audience {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    fn contains(&self, expected: &str) -> bool {
        match self {
            Audience::None => false,
            Audience::Single(s) => s == expected,
            Audience::Multiple(v) => v.iter().any(|s| s == expected),
        }
    }
}

struct KeyCache {
    keys: JwkSet,
    fetched_at: Instant,
    ttl: Duration,
}

impl KeyCache {
    fn new(keys: JwkSet, ttl: Duration) -> Self {
        Self {
            keys,
            fetched_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() > self.ttl
    }
}

/// Production [`TokenVerifier`].
///
/// Keys are fetched lazily on the first verification so startup never
/// blocks on the identity provider.
pub struct JwksTokenVerifier {
    config: JwksConfig,
    http_client: reqwest::Client,
    key_cache: Arc<RwLock<Option<KeyCache>>>,
}

impl JwksTokenVerifier {
    pub fn new(config: JwksConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            key_cache: Arc::new(RwLock::new(None)),
        })
    }

    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!(url = %self.config.jwks_url, "Fetching JWKS");

        let response = self
            .http_client
            .get(&self.config.jwks_url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch JWKS");
                AuthError::service_unavailable(format!("Failed to fetch JWKS: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, "JWKS endpoint returned an error");
            return Err(AuthError::service_unavailable(format!(
                "JWKS endpoint returned {}",
                status
            )));
        }

        let keys: JwkSet = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse JWKS");
            AuthError::service_unavailable(format!("Failed to parse JWKS: {}", e))
        })?;

        tracing::debug!(count = keys.keys.len(), "Fetched signing keys");
        Ok(keys)
    }

    async fn keys(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.key_cache.read().await;
            if let Some(ref cached) = *cache {
                if !cached.is_expired() {
                    return Ok(cached.keys.clone());
                }
            }
        }

        let keys = self.fetch_keys().await?;
        let ttl = self.config.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL);
        *self.key_cache.write().await = Some(KeyCache::new(keys.clone(), ttl));
        Ok(keys)
    }

    fn decoding_key(
        header: &jsonwebtoken::Header,
        keys: &JwkSet,
    ) -> Result<(DecodingKey, Algorithm), AuthError> {
        let kid = header.kid.as_ref().ok_or_else(|| {
            tracing::warn!("JWT missing 'kid' header");
            AuthError::InvalidToken
        })?;

        let jwk = keys.find(kid).ok_or_else(|| {
            tracing::warn!(%kid, "No signing key for kid");
            AuthError::InvalidToken
        })?;

        use jsonwebtoken::jwk::KeyAlgorithm;
        let algorithm = match jwk.common.key_algorithm {
            Some(KeyAlgorithm::RS256) | None => Algorithm::RS256,
            Some(KeyAlgorithm::RS384) => Algorithm::RS384,
            Some(KeyAlgorithm::RS512) => Algorithm::RS512,
            Some(KeyAlgorithm::ES256) => Algorithm::ES256,
            Some(KeyAlgorithm::ES384) => Algorithm::ES384,
            Some(other) => {
                tracing::warn!(algorithm = ?other, "Unsupported signing algorithm");
                return Err(AuthError::InvalidToken);
            }
        };

        let key = DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!(error = %e, "Unusable signing key");
            AuthError::InvalidToken
        })?;

        Ok((key, algorithm))
    }

    fn decode_claims(
        &self,
        token: &str,
        key: &DecodingKey,
        algorithm: Algorithm,
    ) -> Result<TokenData<IdTokenClaims>, AuthError> {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub", "aud"]);

        decode::<IdTokenClaims>(token, key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "Token rejected");
                    AuthError::InvalidToken
                }
            }
        })
    }
}

/// Maps verified claims to a principal. `email` is required.
fn principal_from_claims(claims: IdTokenClaims) -> Result<Principal, AuthError> {
    let raw_email = claims.email.ok_or_else(|| {
        tracing::warn!(sub = %claims.sub, "Token missing email claim");
        AuthError::InvalidToken
    })?;
    let email = Email::new(&raw_email).map_err(|_| AuthError::InvalidToken)?;

    let mut principal = Principal::new(claims.sub, email);
    if let Some(name) = claims.name {
        principal = principal.with_display_name(name);
    }
    if let Some(picture) = claims.picture {
        principal = principal.with_photo_url(picture);
    }
    Ok(principal)
}

#[async_trait]
impl TokenVerifier for JwksTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode JWT header");
            AuthError::InvalidToken
        })?;

        let keys = self.keys().await?;
        let (key, algorithm) = Self::decoding_key(&header, &keys)?;
        let claims = self.decode_claims(token, &key, algorithm)?.claims;

        if claims.iss != self.config.issuer || !claims.aud.contains(&self.config.audience) {
            return Err(AuthError::InvalidToken);
        }

        principal_from_claims(claims)
    }
}

impl std::fmt::Debug for JwksTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwksTokenVerifier")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}
