use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

use crate::{
    entities::admin_user::{AdminUser, AdminUserInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxAdminUserRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn create_admin_user(&self, user: &AdminUserInsert) -> Result<i64, AppError>;
    async fn get_admin_user_by_id(&self, id: i64) -> Result<AdminUser, AppError>;
    async fn get_admin_user_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError>;
}

impl SqlxAdminUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxAdminUserRepo { pool }
    }
}

#[async_trait]
impl AdminUserRepository for SqlxAdminUserRepo {
    async fn create_admin_user(&self, user: &AdminUserInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO admin_users (username, password_hash, email)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Admin user with this username already exists".to_string())
            }
            _ => {
                error!("Failed to create admin user: {}", e);
                AppError::from(e)
            }
        })?;

        Ok(id)
    }

    async fn get_admin_user_by_id(&self, id: i64) -> Result<AdminUser, AppError> {
        sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch admin user {}: {}", id, e);
                AppError::from(e)
            })?
            .ok_or_else(|| AppError::NotFound("Admin user not found".into()))
    }

    async fn get_admin_user_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to look up admin user {}: {}", username, e);
                AppError::from(e)
            })
    }
}
