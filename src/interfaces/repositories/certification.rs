use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

use crate::{
    entities::certification::{Certification, CertificationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError>;
    async fn get_certification_by_id(&self, id: i64) -> Result<Certification, AppError>;
    async fn create_certification(&self, cert: &CertificationInsert) -> Result<i64, AppError>;
}

impl SqlxCertificationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxCertificationRepo { pool }
    }
}

#[async_trait]
impl CertificationRepository for SqlxCertificationRepo {
    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        let certifications = sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications ORDER BY date_obtained DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list certifications: {}", e);
            AppError::from(e)
        })?;

        Ok(certifications)
    }

    async fn get_certification_by_id(&self, id: i64) -> Result<Certification, AppError> {
        sqlx::query_as::<_, Certification>("SELECT * FROM certifications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch certification {}: {}", id, e);
                AppError::from(e)
            })?
            .ok_or_else(|| AppError::NotFound("Certification not found".into()))
    }

    async fn create_certification(&self, cert: &CertificationInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO certifications (
                name, issuer, date_obtained, credential_id, credential_url, image_url
            )
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&cert.name)
        .bind(&cert.issuer)
        .bind(cert.date_obtained)
        .bind(&cert.credential_id)
        .bind(&cert.credential_url)
        .bind(&cert.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create certification: {}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }
}
