//! # Premium Hex
//!
//! Application service layer and adapters for the premium registration
//! service.
//!
//! ## Architecture
//!
//! - `service/` - Registration workflow (validate, insert, charge, commit)
//! - `outbound/` - Payment gateway adapter over the provider SDK
//! - `inbound/` - HTTP adapter (Axum server) and error responder
//!
//! The service is generic over `R: UserRepository` and `G: PaymentGateway`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod outbound;
pub mod service;


pub use outbound::SaasPaymentGateway;
pub use service::RegistrationService;
