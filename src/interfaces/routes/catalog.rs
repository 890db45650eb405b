use actix_web::web;

use crate::handlers::{certifications, skills};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/skills")
            .route(web::get().to(skills::list_skills))
    );
    cfg.service(
        web::resource("/certifications")
            .route(web::get().to(certifications::list_certifications))
    );
}
