//! Premium Registration Service
//!
//! Orchestrates the registration workflow through the repository and
//! payment ports. Contains NO infrastructure logic - pure orchestration.
//!
//! ```text
//! Start -> Validating -> Inserting -> Charging -> Committed
//!              |             |            |
//!              +-------------+------------+----> RolledBack(error)
//! ```
//!
//! Validation runs before a transaction is opened. Once one is open, the
//! first failure of any kind rolls it back; there is no other compensation.

use premium_types::{
    AppError, PaymentGateway, PremiumPlan, TransactionScope, User, UserRepository, Username,
};

/// Application service for premium registrations.
///
/// Generic over the adapters - they are injected at compile time.
/// This enables:
/// - Swapping repositories and payment providers without code changes
/// - Testing with in-memory doubles
/// - Compile-time checks for port implementation
pub struct RegistrationService<R: UserRepository, G: PaymentGateway> {
    repo: R,
    gateway: G,
    plan: PremiumPlan,
}

impl<R: UserRepository, G: PaymentGateway> RegistrationService<R, G> {
    /// Creates a new registration service.
    pub fn new(repo: R, gateway: G, plan: PremiumPlan) -> Self {
        Self {
            repo,
            gateway,
            plan,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying payment gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Registers a premium user: validate, insert, charge, commit.
    ///
    /// Domain failures come back as `AppError::Registration` with the
    /// transaction rolled back; storage and provider faults as
    /// `AppError::Internal`, also rolled back.
    #[tracing::instrument(skip(self))]
    pub async fn register(&self, raw_username: Option<&str>) -> Result<User, AppError> {
        let username = Username::validate(raw_username)?;

        let mut tx = self.repo.begin().await?;

        match self.insert_and_charge(&mut tx, &username).await {
            Ok(user) => {
                self.repo.commit(tx).await?;
                tracing::info!(user_id = %user.id, %username, "premium user registered");
                Ok(user)
            }
            Err(err) => {
                if let Err(rollback_err) = self.repo.rollback(tx).await {
                    // The handle is gone either way; the store discards the
                    // uncommitted writes when the connection is reset.
                    tracing::error!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    async fn insert_and_charge(
        &self,
        tx: &mut <R as TransactionScope>::Tx,
        username: &Username,
    ) -> Result<User, AppError> {
        let user = self.repo.insert_user(tx, username).await?;
        tracing::debug!(user_id = %user.id, "user row inserted, charging");

        self.gateway.charge(&user, self.plan.price).await?;

        Ok(user)
    }
}
