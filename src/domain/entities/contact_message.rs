use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{entities::text_list::serialize_flag, errors::AppError};

#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    #[serde(serialize_with = "serialize_flag")]
    pub read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Public contact form. Only presence of the required fields is checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,

    pub subject: Option<String>,

    #[validate(
        required(message = "message is required"),
        length(min = 1, message = "message is required")
    )]
    pub message: Option<String>,
}

impl TryFrom<ContactForm> for ContactMessageInsert {
    type Error = AppError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ContactMessageInsert {
            name: value.name.ok_or_else(|| AppError::missing_field("name"))?,
            email: value.email.ok_or_else(|| AppError::missing_field("email"))?,
            subject: value.subject,
            message: value.message.ok_or_else(|| AppError::missing_field("message"))?,
        })
    }
}
