//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Stripe Checkout settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret key
    pub stripe_api_key: String,

    /// ISO currency code for checkout line items
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Front-end origin that checkout redirects back to
    pub client_url: String,
}

impl PaymentConfig {
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Redirect target after a completed checkout. Stripe substitutes the
    /// `{CHECKOUT_SESSION_ID}` placeholder.
    pub fn success_url(&self) -> String {
        format!(
            "{}/payment-success?session_id={{CHECKOUT_SESSION_ID}}",
            self.client_url.trim_end_matches('/')
        )
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/payment-cancelled", self.client_url.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("CLUBHUB__PAYMENT__STRIPE_API_KEY"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if self.client_url.is_empty() {
            return Err(ValidationError::MissingRequired("CLUBHUB__PAYMENT__CLIENT_URL"));
        }
        if self.currency.len() != 3 {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: String::new(),
            currency: default_currency(),
            client_url: String::new(),
        }
    }
}

fn default_currency() -> String {
    "usd".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PaymentConfig {
        PaymentConfig {
            stripe_api_key: "sk_test_abcd1234".to_string(),
            client_url: "http://localhost:5173/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_redirect_urls() {
        let config = valid();
        assert!(config.is_test_mode());
        assert_eq!(
            config.success_url(),
            "http://localhost:5173/payment-success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(config.cancel_url(), "http://localhost:5173/payment-cancelled");
    }

    #[test]
    fn test_validation() {
        assert!(valid().validate().is_ok());
        assert!(PaymentConfig::default().validate().is_err());

        let publishable = PaymentConfig {
            stripe_api_key: "pk_test_xxx".to_string(),
            ..valid()
        };
        assert!(matches!(
            publishable.validate(),
            Err(ValidationError::InvalidStripeKey)
        ));

        let bad_currency = PaymentConfig {
            currency: "dollars".to_string(),
            ..valid()
        };
        assert!(bad_currency.validate().is_err());
    }
}
