//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::error::DatabaseError;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;

use premium_types::{
    RepoError, TransactionScope, User, UserError, UserId, UserRepository, Username,
};

use crate::types::DbUser;

/// Extended result code for a failed UNIQUE constraint
/// (`SQLITE_CONSTRAINT_UNIQUE`). A primary key clash reports 1555 instead.
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_users.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_users.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    /// Counts committed rows carrying `username`.
    pub async fn count_by_username(&self, username: &str) -> Result<i64, RepoError> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM users WHERE username = ?"#)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

fn is_username_conflict(err: &dyn DatabaseError) -> bool {
    err.is_unique_violation() && err.code().as_deref() == Some(SQLITE_CONSTRAINT_UNIQUE)
}

fn map_insert_error(err: sqlx::Error, username: &Username) -> RepoError {
    match &err {
        sqlx::Error::Database(db_err) if is_username_conflict(&**db_err) => {
            tracing::debug!(%username, "username uniqueness violated");
            UserError::UserExists {
                username: username.to_string(),
            }
            .into()
        }
        _ => RepoError::Database(err.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionScope for SqliteRepo {
    type Tx = sqlx::Transaction<'static, Sqlite>;

    async fn begin(&self) -> Result<Self::Tx, RepoError> {
        self.pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), RepoError> {
        tx.commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), RepoError> {
        tx.rollback()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn insert_user(
        &self,
        tx: &mut Self::Tx,
        username: &Username,
    ) -> Result<User, RepoError> {
        let id: i64 = sqlx::query_scalar(r#"INSERT INTO users (username) VALUES (?) RETURNING id"#)
            .bind(username.as_str())
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| map_insert_error(e, username))?;

        Ok(User::from_parts(UserId::from_i64(id), username.clone()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> =
            sqlx::query_as(r#"SELECT id, username FROM users WHERE username = ?"#)
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbUser::into_domain).transpose()
    }
}
