use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Certification {
    pub id: i64,
    pub name: String,
    pub issuer: Option<String>,
    /// Free text as stored. Rows written here are ISO dates, older rows may
    /// hold values like `June 2023`.
    pub date_obtained: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationInsert {
    pub name: String,
    pub issuer: Option<String>,
    pub date_obtained: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewCertificationRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,

    pub issuer: Option<String>,

    /// ISO-8601 calendar date, e.g. `2024-03-01`.
    pub date_obtained: Option<NaiveDate>,

    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
}

impl TryFrom<NewCertificationRequest> for CertificationInsert {
    type Error = AppError;

    fn try_from(value: NewCertificationRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(CertificationInsert {
            name: value.name.ok_or_else(|| AppError::missing_field("name"))?,
            issuer: value.issuer,
            date_obtained: value.date_obtained,
            credential_id: value.credential_id,
            credential_url: value.credential_url,
            image_url: value.image_url,
        })
    }
}
