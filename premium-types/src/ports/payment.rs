//! Payment gateway port.

use crate::domain::{Money, User};
use crate::error::GatewayError;

/// Port for charging users through an external payment provider.
///
/// Provider declines come back as `GatewayError::Payment`; timeouts and
/// unreadable provider responses as the other variants.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Charges `amount` to `user`.
    async fn charge(&self, user: &User, amount: Money) -> Result<(), GatewayError>;
}
