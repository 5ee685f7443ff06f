//! Payment gateway adapter over the payment SaaS SDK.

use async_trait::async_trait;
use payment_provider::{ChargeRequest, DeclineCode, SaasClient, SaasError};

use premium_types::{GatewayError, Money, PaymentError, PaymentGateway, User};

/// [`PaymentGateway`] backed by a [`SaasClient`].
pub struct SaasPaymentGateway {
    client: SaasClient,
}

impl SaasPaymentGateway {
    pub fn new(client: SaasClient) -> Self {
        Self { client }
    }

    /// Returns the wrapped SDK client.
    pub fn client(&self) -> &SaasClient {
        &self.client
    }
}

/// Every decline code lands on exactly one payment failure.
fn to_payment_error(code: DeclineCode) -> PaymentError {
    match code {
        DeclineCode::CardExpired => PaymentError::ExpiredCard,
        DeclineCode::CreditLimitExceeded => PaymentError::InsufficientFunds,
    }
}

fn translate(err: SaasError) -> GatewayError {
    match err {
        SaasError::Declined(code) => to_payment_error(code).into(),
        SaasError::Timeout(after) => {
            GatewayError::Unavailable(format!("timed out after {:?}", after))
        }
        SaasError::UnexpectedResponse(body) => GatewayError::MalformedResponse(body),
    }
}

#[async_trait]
impl PaymentGateway for SaasPaymentGateway {
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id, amount = %amount))]
    async fn charge(&self, user: &User, amount: Money) -> Result<(), GatewayError> {
        let req = ChargeRequest::new(
            user.id.to_string(),
            amount.amount(),
            amount.currency().to_string(),
        );

        let receipt = self.client.create_charge(req).await.map_err(translate)?;

        if receipt.amount_minor != amount.amount() {
            return Err(GatewayError::MalformedResponse(format!(
                "charged {} instead of {}",
                receipt.amount_minor,
                amount.amount()
            )));
        }

        tracing::info!(charge_id = %receipt.charge_id, "charge approved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payment_provider::Behavior;
    use premium_types::{Currency, UserId, Username};

    fn user() -> User {
        User::from_parts(
            UserId::from_i64(7),
            Username::validate(Some("alice")).unwrap(),
        )
    }

    fn price() -> Money {
        Money::from_unsigned(999, Currency::USD)
    }

    #[tokio::test]
    async fn test_approved_charge() {
        let gateway = SaasPaymentGateway::new(SaasClient::new(Behavior::Approve));

        gateway.charge(&user(), price()).await.unwrap();

        assert_eq!(gateway.client().attempts(), 1);
    }

    #[tokio::test]
    async fn test_expired_card_decline() {
        let gateway = SaasPaymentGateway::new(SaasClient::new(Behavior::Decline(
            DeclineCode::CardExpired,
        )));

        let result = gateway.charge(&user(), price()).await;

        assert!(matches!(
            result,
            Err(GatewayError::Payment(PaymentError::ExpiredCard))
        ));
    }

    #[tokio::test]
    async fn test_credit_limit_decline() {
        let gateway = SaasPaymentGateway::new(SaasClient::new(Behavior::Decline(
            DeclineCode::CreditLimitExceeded,
        )));

        let result = gateway.charge(&user(), price()).await;

        assert!(matches!(
            result,
            Err(GatewayError::Payment(PaymentError::InsufficientFunds))
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_not_a_decline() {
        let gateway = SaasPaymentGateway::new(SaasClient::new(Behavior::Timeout));

        let result = gateway.charge(&user(), price()).await;

        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_malformed_response_is_not_a_decline() {
        let gateway = SaasPaymentGateway::new(SaasClient::new(Behavior::Malformed));

        let result = gateway.charge(&user(), price()).await;

        assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
    }
}
