use crate::{
    entities::{
        certification::{Certification, CertificationInsert, NewCertificationRequest},
        responses::CreatedResponse,
    },
    errors::AppError,
    repositories::certification::CertificationRepository,
};

pub struct CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub certification_repo: R,
}

impl<R> CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub fn new(certification_repo: R) -> Self {
        CertificationHandler { certification_repo }
    }

    pub async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        self.certification_repo.list_certifications().await
    }

    pub async fn create_certification(
        &self,
        request: NewCertificationRequest,
    ) -> Result<CreatedResponse, AppError> {
        let insert = CertificationInsert::try_from(request)?;
        let id = self.certification_repo.create_certification(&insert).await?;

        Ok(CreatedResponse::new("Certification created", id))
    }
}
