use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::certification::NewCertificationRequest, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_certifications(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certifications = state.certification_handler.list_certifications().await?;
    Ok(HttpResponse::Ok().json(certifications))
}

#[instrument(skip(state, data))]
pub async fn create_certification(
    state: web::Data<AppState>,
    data: web::Json<NewCertificationRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.certification_handler
        .create_certification(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
