use actix_web::web;

use crate::handlers::{blog_posts, certifications, projects, skills};

// Unauthenticated, matching the behaviour existing clients rely on.
// Put these behind a reverse proxy or auth layer before exposing them.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/projects")
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::put().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project))
            )
            .service(
                web::resource("/skills")
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/certifications")
                    .route(web::post().to(certifications::create_certification))
            )
            .service(
                web::resource("/blog")
                    .route(web::post().to(blog_posts::create_blog_post))
            )
    );
}
