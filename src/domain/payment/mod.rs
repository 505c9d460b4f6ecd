//! Recorded payments.

mod aggregate;
mod amount;

pub use aggregate::{Payment, PaymentStatus, PaymentType};
pub use amount::to_minor_units;
