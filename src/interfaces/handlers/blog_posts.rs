use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::blog_post::NewBlogPostRequest, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_published_posts(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.blog_handler.list_published_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_published_post(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state, data))]
pub async fn create_blog_post(
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler
        .create_blog_post(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
