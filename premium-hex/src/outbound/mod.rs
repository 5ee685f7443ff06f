//! Outbound adapters.

mod payment;

pub use payment::SaasPaymentGateway;
