//! # Premium Types
//!
//! Domain types and port traits for the premium registration service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (User, Username, Money)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain errors and the fatal tiers wrapped around them

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Currency, Money, NegativeAmount, PremiumPlan, User, UserId, Username};
pub use dto::*;
pub use error::{AppError, GatewayError, PaymentError, RegistrationError, RepoError, UserError};
pub use ports::{PaymentGateway, TransactionScope, UserRepository};
