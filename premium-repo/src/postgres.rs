//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::error::DatabaseError;
use sqlx::{PgPool, Postgres};

use premium_types::{
    RepoError, TransactionScope, User, UserError, UserId, UserRepository, Username,
};

use crate::types::DbUser;

/// Name of the unique constraint on `users.username`, as declared in the
/// migration.
const USERNAME_CONSTRAINT: &str = "users_username_key";

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository. Isolation is left at the server default.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_users_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }
}

// SQLSTATE 23505 alone is not enough: only the username constraint is a
// domain outcome.
fn is_username_conflict(err: &dyn DatabaseError) -> bool {
    err.is_unique_violation() && err.constraint() == Some(USERNAME_CONSTRAINT)
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
impl TransactionScope for PostgresRepo {
    type Tx = sqlx::Transaction<'static, Postgres>;

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
impl UserRepository for PostgresRepo {
    async fn insert_user(
        &self,
        tx: &mut Self::Tx,
        username: &Username,
    ) -> Result<User, RepoError> {
        let id: i64 =
            sqlx::query_scalar(r#"INSERT INTO users (username) VALUES ($1) RETURNING id"#)
                .bind(username.as_str())
                .fetch_one(&mut **tx)
                .await
                .map_err(|e| map_insert_error(e, username))?;

        Ok(User::from_parts(UserId::from_i64(id), username.clone()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> =
            sqlx::query_as(r#"SELECT id, username FROM users WHERE username = $1"#)
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbUser::into_domain).transpose()
    }
}
