//! Identity token verification configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Settings for verifying bearer ID tokens against a JWKS endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected `iss` claim
    pub issuer: String,

    /// Expected `aud` claim
    pub audience: String,

    /// Public signing keys
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,

    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_secs: u64,
}

impl AuthConfig {
    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    /// HTTPS is mandatory for issuer and key URLs in production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("CLUBHUB__AUTH__ISSUER"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("CLUBHUB__AUTH__AUDIENCE"));
        }
        if self.jwks_url.is_empty() {
            return Err(ValidationError::MissingRequired("CLUBHUB__AUTH__JWKS_URL"));
        }

        if *environment == Environment::Production
            && (!self.issuer.starts_with("https://") || !self.jwks_url.starts_with("https://"))
        {
            return Err(ValidationError::AuthUrlMustBeHttps);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            jwks_url: default_jwks_url(),
            jwks_cache_ttl_secs: default_jwks_cache_ttl(),
        }
    }
}

fn default_jwks_url() -> String {
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com"
        .to_string()
}

fn default_jwks_cache_ttl() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AuthConfig {
        AuthConfig {
            issuer: "https://securetoken.google.com/clubhub".to_string(),
            audience: "clubhub".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.jwks_cache_ttl(), Duration::from_secs(3600));
        assert!(config.jwks_url.starts_with("https://"));
    }

    #[test]
    fn test_missing_issuer_and_audience() {
        assert!(AuthConfig::default()
            .validate(&Environment::Development)
            .is_err());

        let no_audience = AuthConfig {
            audience: String::new(),
            ..valid()
        };
        assert!(matches!(
            no_audience.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("CLUBHUB__AUTH__AUDIENCE"))
        ));
    }

    #[test]
    fn test_production_requires_https() {
        let config = AuthConfig {
            jwks_url: "http://localhost:9099/jwks".to_string(),
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
        assert!(valid().validate(&Environment::Production).is_ok());
    }
}
