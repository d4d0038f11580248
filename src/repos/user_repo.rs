use std::future::Future;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::user::User;

/// Read-only collaborator port into the parent application's account store.
pub trait UserRepo: Clone + Send + Sync + 'static {
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<User>>> + Send;
}

#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepo for PgUserRepo {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, display_name, email FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
