//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use premium_types::{RepoError, TransactionScope, UserError, UserRepository, Username};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    /// File-backed repo; readers never block on an open writer in WAL mode.
    async fn setup_file_repo(dir: &tempfile::TempDir) -> SqliteRepo {
        let url = format!("sqlite://{}/premium.db", dir.path().display());
        SqliteRepo::new(&url).await.unwrap()
    }

    fn name(raw: &str) -> Username {
        Username::validate(Some(raw)).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_commit() {
        let repo = setup_repo().await;

        let mut tx = repo.begin().await.unwrap();
        let user = repo.insert_user(&mut tx, &name("alice")).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert_eq!(user.username.as_str(), "alice");

        let fetched = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_ids_are_assigned_by_store() {
        let repo = setup_repo().await;

        let mut tx = repo.begin().await.unwrap();
        let first = repo.insert_user(&mut tx, &name("alice")).await.unwrap();
        let second = repo.insert_user(&mut tx, &name("bob")).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let repo = setup_repo().await;

        let result = repo.find_by_username("nobody").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_user_exists() {
        let repo = setup_repo().await;

        let mut tx = repo.begin().await.unwrap();
        repo.insert_user(&mut tx, &name("alice")).await.unwrap();
        repo.commit(tx).await.unwrap();

        let mut tx = repo.begin().await.unwrap();
        let result = repo.insert_user(&mut tx, &name("alice")).await;
        repo.rollback(tx).await.unwrap();

        match result {
            Err(RepoError::User(UserError::UserExists { username })) => {
                assert_eq!(username, "alice")
            }
            other => panic!("expected UserExists, got {:?}", other),
        }
        assert_eq!(repo.count_by_username("alice").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rollback_discards_insert() {
        let repo = setup_repo().await;

        let mut tx = repo.begin().await.unwrap();
        repo.insert_user(&mut tx, &name("bob")).await.unwrap();
        repo.rollback(tx).await.unwrap();

        assert_eq!(repo.count_by_username("bob").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let repo = setup_file_repo(&dir).await;

        {
            let mut tx = repo.begin().await.unwrap();
            repo.insert_user(&mut tx, &name("carol")).await.unwrap();
        }

        assert_eq!(repo.count_by_username("carol").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_other_storage_faults_are_fatal() {
        let repo = setup_repo().await;
        sqlx::query("DROP TABLE users")
            .execute(repo.pool())
            .await
            .unwrap();

        let mut tx = repo.begin().await.unwrap();
        let result = repo.insert_user(&mut tx, &name("dave")).await;

        assert!(matches!(result, Err(RepoError::Database(_))));
    }

    #[tokio::test]
    async fn test_declared_length_is_not_enforced() {
        let repo = setup_repo().await;
        let long = "x".repeat(51);

        let mut tx = repo.begin().await.unwrap();
        let user = repo.insert_user(&mut tx, &name(&long)).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert_eq!(user.username.as_str(), long);
        assert_eq!(repo.count_by_username(&long).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let repo = setup_repo().await;

        repo.create_schema().await.unwrap();
        repo.create_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_on_disk_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/nested/premium.db", dir.path().display());
        let repo = SqliteRepo::new(&url).await.unwrap();

        let mut tx = repo.begin().await.unwrap();
        repo.insert_user(&mut tx, &name("erin")).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert_eq!(repo.count_by_username("erin").await.unwrap(), 1);
    }
}
