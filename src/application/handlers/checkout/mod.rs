//! Paid memberships and event places, via hosted checkout.
//!
//! A checkout starts with [`CreateCheckoutHandler`], which opens a gateway
//! session for the stored price. Once the member returns from the gateway,
//! [`ConfirmPaymentHandler`] records the payment and the membership or
//! registration it bought.

mod confirm_payment;
mod create_checkout;

pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult};
pub use create_checkout::{CheckoutUrls, CreateCheckoutCommand, CreateCheckoutHandler};
