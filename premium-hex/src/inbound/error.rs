//! Error responder: turns application errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use premium_types::{AppError, ErrorResponse, PaymentError, RegistrationError, UserError};

/// Status and message for a registration failure.
///
/// No wildcard arm: a new variant must be given a response here before the
/// crate compiles.
pub fn respond(err: &RegistrationError) -> (StatusCode, &'static str) {
    match err {
        RegistrationError::User(UserError::UsernameMissing) => {
            (StatusCode::BAD_REQUEST, "Username missing")
        }
        RegistrationError::User(UserError::UserExists { .. }) => {
            (StatusCode::CONFLICT, "Username already exists")
        }
        RegistrationError::Payment(PaymentError::ExpiredCard) => {
            (StatusCode::PAYMENT_REQUIRED, "Card expired")
        }
        RegistrationError::Payment(PaymentError::InsufficientFunds) => {
            (StatusCode::PAYMENT_REQUIRED, "Credit maxed")
        }
    }
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Registration(err) => {
                tracing::warn!(error = %err, "registration rejected");
                respond(err)
            }
            AppError::Internal(detail) => {
                // Details stay in the logs.
                tracing::error!(error = %detail, "registration failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<RegistrationError> {
        vec![
            UserError::UsernameMissing.into(),
            UserError::UserExists {
                username: "alice".into(),
            }
            .into(),
            PaymentError::ExpiredCard.into(),
            PaymentError::InsufficientFunds.into(),
        ]
    }

    #[test]
    fn test_response_table() {
        let table: Vec<_> = all_variants().iter().map(respond).collect();

        assert_eq!(
            table,
            vec![
                (StatusCode::BAD_REQUEST, "Username missing"),
                (StatusCode::CONFLICT, "Username already exists"),
                (StatusCode::PAYMENT_REQUIRED, "Card expired"),
                (StatusCode::PAYMENT_REQUIRED, "Credit maxed"),
            ]
        );
    }

    #[test]
    fn test_every_variant_has_a_distinct_response() {
        let mut table: Vec<_> = all_variants().iter().map(respond).collect();
        table.sort_by_key(|(status, message)| (status.as_u16(), *message));
        table.dedup();

        assert_eq!(table.len(), all_variants().len());
    }

    #[test]
    fn test_internal_error_is_generic_500() {
        let response = ApiError(AppError::Internal("disk on fire".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_error_status() {
        let response = ApiError(PaymentError::ExpiredCard.into()).into_response();

        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }
}
