//! Stripe Checkout implementation of `PaymentGateway`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key, "usd");
//! let gateway = StripePaymentGateway::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::ports::{
    CheckoutRequest, CheckoutSession, CheckoutSessionDetails, PaymentError, PaymentGateway,
};

use super::wire_types::{StripeCheckoutSession, StripeErrorResponse};

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Lowercase ISO code applied to every line item.
    currency: String,

    api_base_url: String,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            currency: currency.into().to_lowercase(),
            api_base_url: STRIPE_API_BASE.to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl From<&PaymentConfig> for StripeConfig {
    fn from(config: &PaymentConfig) -> Self {
        StripeConfig::new(config.stripe_api_key.clone(), config.currency.clone())
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("currency", &self.currency)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

/// Stripe-hosted checkout.
#[derive(Debug)]
pub struct StripePaymentGateway {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentGateway {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Form fields for `POST /v1/checkout/sessions`.
    fn session_params(&self, request: &CheckoutRequest) -> Vec<(String, String)> {
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            (
                "customer_email".to_string(),
                request.customer_email.to_string(),
            ),
            (
                "line_items[0][price_data][currency]".to_string(),
                self.config.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.product_name.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                request.unit_amount.to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
        ];
        params.extend(
            request
                .metadata
                .to_pairs()
                .into_iter()
                .map(|(key, value)| (format!("metadata[{}]", key), value)),
        );
        params
    }

    async fn error_from_response(response: reqwest::Response) -> PaymentError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<StripeErrorResponse>(&body).ok();
        let message = parsed
            .as_ref()
            .and_then(|p| p.error.message.clone())
            .unwrap_or_else(|| format!("Stripe API returned {}", status));

        tracing::error!(%status, error = %message, "Stripe request failed");

        let error = match status {
            reqwest::StatusCode::UNAUTHORIZED => PaymentError::authentication(message),
            s if s.is_client_error() => PaymentError::invalid_request(message),
            _ => PaymentError::provider(message),
        };
        match parsed.and_then(|p| p.error.code.or(p.error.error_type)) {
            Some(code) => error.with_provider_code(code),
            None => error,
        }
    }

    async fn parse_session(response: reqwest::Response) -> Result<StripeCheckoutSession, PaymentError> {
        response
            .json()
            .await
            .map_err(|e| PaymentError::provider(format!("Failed to parse Stripe response: {}", e)))
    }
}

#[async_trait]
impl PaymentGateway for StripePaymentGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&self.session_params(&request))
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let session = Self::parse_session(response).await?;
        let url = session
            .url
            .ok_or_else(|| PaymentError::provider("Stripe session has no checkout url"))?;

        tracing::info!(session_id = %session.id, "Checkout session created");
        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutSessionDetails>, PaymentError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.config.api_base_url, session_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(Some(Self::parse_session(response).await?.into()))
    }
}
