use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

use crate::{
    entities::contact_message::{ContactMessage, ContactMessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<i64, AppError>;
    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to store contact message: {}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }

    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch contact message {}: {}", id, e);
                AppError::from(e)
            })?
            .ok_or_else(|| AppError::NotFound("Contact message not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::sqlx_repo::{test_logs::CapturedLogs, test_pool};

    #[tokio::test]
    async fn stores_message_as_unread() {
        let repo = SqlxContactMessageRepo::new(test_pool().await);
        let id = repo
            .create_contact_message(&ContactMessageInsert {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: None,
                message: "Hello there".into(),
            })
            .await
            .unwrap();

        let stored = repo.get_contact_message_by_id(id).await.unwrap();
        assert_eq!(stored.name, "Ada");
        assert_eq!(stored.subject, None);
        assert!(!stored.read);
    }

    #[tokio::test]
    async fn store_failures_are_logged() {
        let (logs, _guard) = CapturedLogs::install();
        let pool = test_pool().await;
        sqlx::query("DROP TABLE contact_messages").execute(&pool).await.unwrap();

        let repo = SqlxContactMessageRepo::new(pool);
        assert!(matches!(repo.get_contact_message_by_id(1).await, Err(AppError::InternalError(_))));
        assert!(logs.contents().contains("Failed to fetch contact message 1"));
    }
}
