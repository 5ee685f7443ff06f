//! Simulated Payment SaaS SDK
//!
//! Stands in for a third-party card processor's client library. It speaks
//! the provider's own vocabulary (charge requests, receipts, decline codes)
//! and knows nothing about premium users.
//!
//! The client is scripted with a [`Behavior`] so development and tests can
//! exercise every outcome a real processor produces: approvals, card
//! declines, and the transport faults that are not declines at all.
//!
//! # Example
//! ```
//! use payment_provider::{Behavior, ChargeRequest, SaasClient};
//!
//! # tokio_test_block(async {
//! let client = SaasClient::new(Behavior::Approve);
//! let receipt = client
//!     .create_charge(ChargeRequest::new("user-1", 999, "USD"))
//!     .await
//!     .unwrap();
//! assert_eq!(receipt.amount_minor, 999);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f);
//! # }
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

/// Reason code the processor attaches to a declined charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclineCode {
    /// `card_expired`
    CardExpired,
    /// `credit_limit_exceeded`
    CreditLimitExceeded,
}

impl DeclineCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclineCode::CardExpired => "card_expired",
            DeclineCode::CreditLimitExceeded => "credit_limit_exceeded",
        }
    }
}

impl fmt::Display for DeclineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the SDK can fail with.
#[derive(Debug, thiserror::Error)]
pub enum SaasError {
    #[error("charge declined: {0}")]
    Declined(DeclineCode),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected response from processor: {0}")]
    UnexpectedResponse(String),
}

/// A request to move money from the customer's card on file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Caller-side customer reference
    pub customer_ref: String,
    /// Amount in the currency's minor unit
    pub amount_minor: i64,
    /// ISO 4217 code
    pub currency: String,
}

impl ChargeRequest {
    pub fn new(
        customer_ref: impl Into<String>,
        amount_minor: i64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            customer_ref: customer_ref.into(),
            amount_minor,
            currency: currency.into(),
        }
    }
}

/// Proof that a charge went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeReceipt {
    pub charge_id: String,
    pub amount_minor: i64,
    pub currency: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Scripted behaviour
// ─────────────────────────────────────────────────────────────────────────────

/// How the simulated processor answers every charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Approve every charge.
    Approve,
    /// Decline every charge with the given code.
    Decline(DeclineCode),
    /// Never answer; the SDK gives up after its timeout.
    Timeout,
    /// Answer with a body the SDK cannot parse.
    Malformed,
}

/// Error returned when parsing an unknown behaviour name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown payment provider mode: {0}")]
pub struct UnknownBehavior(pub String);

impl FromStr for Behavior {
    type Err = UnknownBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(Behavior::Approve),
            "expired-card" => Ok(Behavior::Decline(DeclineCode::CardExpired)),
            "insufficient-funds" => Ok(Behavior::Decline(DeclineCode::CreditLimitExceeded)),
            "timeout" => Ok(Behavior::Timeout),
            "malformed" => Ok(Behavior::Malformed),
            _ => Err(UnknownBehavior(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the simulated processor.
pub struct SaasClient {
    behavior: Behavior,
    attempts: AtomicU64,
}

impl SaasClient {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            attempts: AtomicU64::new(0),
        }
    }

    /// Submits a charge.
    pub async fn create_charge(&self, req: ChargeRequest) -> Result<ChargeReceipt, SaasError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            customer = %req.customer_ref,
            amount = req.amount_minor,
            currency = %req.currency,
            "submitting charge"
        );

        match self.behavior {
            Behavior::Approve => Ok(ChargeReceipt {
                charge_id: format!("ch_{}", Uuid::new_v4().simple()),
                amount_minor: req.amount_minor,
                currency: req.currency,
            }),
            Behavior::Decline(code) => Err(SaasError::Declined(code)),
            Behavior::Timeout => Err(SaasError::Timeout(REQUEST_TIMEOUT)),
            Behavior::Malformed => Err(SaasError::UnexpectedResponse(
                "missing field `charge_id`".into(),
            )),
        }
    }

    /// Number of charges submitted so far, whatever their outcome.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }
}

impl Default for SaasClient {
    fn default() -> Self {
        Self::new(Behavior::Approve)
    }
}
