use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::User;

/// Read access to the `users` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user row in the database's natural order.
    async fn list_all(&self) -> Result<Vec<User>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.db)
            .await
    }
}
