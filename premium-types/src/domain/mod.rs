//! Domain models for the premium registration service.

pub mod money;
pub mod plan;
pub mod user;

pub use money::{Currency, Money, NegativeAmount, UnsupportedCurrency};
pub use plan::PremiumPlan;
pub use user::{User, UserId, Username};
