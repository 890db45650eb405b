use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct AdminUserInsert {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewAdminUser {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,

    pub email: Option<String>,
}

impl NewAdminUser {
    /// Validates the request and pairs it with an already computed hash.
    pub fn prepare_for_insert(
        self,
        hash: impl FnOnce(&str) -> Result<String, AppError>,
    ) -> Result<AdminUserInsert, AppError> {
        self.validate()?;

        let username = self.username.ok_or_else(|| AppError::missing_field("username"))?;
        let password = self.password.ok_or_else(|| AppError::missing_field("password"))?;

        Ok(AdminUserInsert {
            username,
            password_hash: hash(&password)?,
            email: self.email,
        })
    }
}
