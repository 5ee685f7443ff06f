//! Error types for the premium registration service.
//!
//! Failures come in two tiers. The domain tier ([`UserError`],
//! [`PaymentError`], folded into [`RegistrationError`]) is closed and every
//! consumer matches it exhaustively. Everything else is fatal and only ever
//! surfaces as [`AppError::Internal`].

/// Failures of the user half of the registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("Username missing")]
    UsernameMissing,

    #[error("Username already exists: {username}")]
    UserExists { username: String },
}

/// Failures of the charge half of the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Card expired")]
    ExpiredCard,

    #[error("Credit maxed")]
    InsufficientFunds,
}

/// The single error domain threaded through the registration workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Repository-level errors (data access failures).
///
/// Only a username uniqueness violation is reported as [`RepoError::User`];
/// any other storage fault is `Database` or `Transaction`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

/// Payment gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("Payment provider unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed payment provider response: {0}")]
    MalformedResponse(String),
}

/// Application-level errors (for HTTP responses).
///
/// Domain failures keep their exact variant; all fatal faults collapse into
/// `Internal` and carry a description for logging only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        AppError::Registration(err.into())
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        AppError::Registration(err.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::User(e) => AppError::Registration(e.into()),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Transaction(e) => AppError::Internal(e),
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Payment(e) => AppError::Registration(e.into()),
            GatewayError::Unavailable(e) => {
                AppError::Internal(format!("payment provider unavailable: {}", e))
            }
            GatewayError::MalformedResponse(e) => {
                AppError::Internal(format!("malformed payment provider response: {}", e))
            }
        }
    }
}
