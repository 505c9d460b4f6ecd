//! Stripe Checkout adapter.
//!
//! Implements the `PaymentGateway` port with one-off Checkout Sessions:
//! - creating a hosted session for a single line item
//! - retrieving a session to confirm it was paid
//!
//! The secret key is held as a `secrecy::SecretString` and only exposed
//! when building the request's basic-auth header.

mod mock_payment_gateway;
mod stripe_gateway;
mod wire_types;

pub use mock_payment_gateway::MockPaymentGateway;
pub use stripe_gateway::{StripePaymentGateway, StripeConfig};
