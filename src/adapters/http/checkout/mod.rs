//! Paid memberships and event registrations through hosted checkout.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CheckoutRequest, CheckoutResponse, ConfirmPaymentRequest, ConfirmPaymentResponse,
};
pub use routes::checkout_routes;
