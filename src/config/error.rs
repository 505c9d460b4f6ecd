//! Errors raised while loading or checking [`super::AppConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that ClubHub cannot start with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("CLUBHUB__SERVER__PORT must be non-zero")]
    InvalidPort,

    #[error("CLUBHUB__SERVER__HOST and CLUBHUB__SERVER__PORT do not form a socket address")]
    InvalidBindAddress,

    #[error("CLUBHUB__SERVER__REQUEST_TIMEOUT_SECS must be between 1 and 300")]
    InvalidTimeout,

    #[error("CLUBHUB__DATABASE__URL must be postgres://, postgresql:// or memory://")]
    InvalidDatabaseUrl,

    #[error("CLUBHUB__DATABASE__MIN_CONNECTIONS is larger than CLUBHUB__DATABASE__MAX_CONNECTIONS")]
    InvalidPoolSize,

    #[error("CLUBHUB__DATABASE__MAX_CONNECTIONS may not exceed 100")]
    PoolSizeTooLarge,

    #[error("token issuer and JWKS URL must be https in production")]
    AuthUrlMustBeHttps,

    #[error("CLUBHUB__PAYMENT__STRIPE_API_KEY is not a Stripe secret key")]
    InvalidStripeKey,

    #[error("CLUBHUB__PAYMENT__CURRENCY must be a three-letter ISO code")]
    InvalidCurrency,
}
