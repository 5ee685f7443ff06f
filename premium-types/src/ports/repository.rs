//! Repository ports.
//!
//! The store adapters (Postgres, SQLite) implement both traits. The
//! transaction handle is an explicit value owned by the caller and passed
//! into every write.

use crate::domain::{User, Username};
use crate::error::RepoError;

/// Begin/commit/rollback over the backing store.
///
/// Dropping a `Tx` without committing MUST roll it back, so a handle that
/// escapes through an early return or a panic never leaves partial writes.
#[async_trait::async_trait]
pub trait TransactionScope: Send + Sync + 'static {
    /// Active transaction handle, exclusively owned by one unit of work.
    type Tx: Send;

    /// Checks a connection out of the pool and opens a transaction on it.
    async fn begin(&self) -> Result<Self::Tx, RepoError>;

    /// Commits every write made through `tx`.
    async fn commit(&self, tx: Self::Tx) -> Result<(), RepoError>;

    /// Discards every write made through `tx`.
    async fn rollback(&self, tx: Self::Tx) -> Result<(), RepoError>;
}

/// Persistence port for users.
#[async_trait::async_trait]
pub trait UserRepository: TransactionScope {
    /// Inserts a user row inside `tx`.
    ///
    /// A violation of the username uniqueness constraint is reported as
    /// `RepoError::User(UserError::UserExists { .. })`. Any other failure is
    /// `Database` or `Transaction`.
    async fn insert_user(
        &self,
        tx: &mut Self::Tx,
        username: &Username,
    ) -> Result<User, RepoError>;

    /// Looks up a committed user by name.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}
