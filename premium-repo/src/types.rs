//! Database row types shared by the SQLite and PostgreSQL adapters.

use sqlx::FromRow;

use premium_types::{RepoError, User, UserId, Username};

/// User row from database.
#[derive(FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
}

impl DbUser {
    pub fn into_domain(self) -> Result<User, RepoError> {
        let username = Username::validate(Some(&self.username))
            .map_err(|_| RepoError::Database(format!("user {} has an empty username", self.id)))?;

        Ok(User::from_parts(UserId::from_i64(self.id), username))
    }
}
