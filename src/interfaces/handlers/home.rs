use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to the {}!", state.app_name),
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": "/api"
    }))
}
