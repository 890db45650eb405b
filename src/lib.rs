use sqlx::SqlitePool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod startup;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, db};

use repositories::sqlx_repo::{
    SqlxAdminUserRepo, SqlxBlogPostRepo, SqlxCertificationRepo, SqlxContactMessageRepo,
    SqlxProjectRepo, SqlxSkillRepo,
};
use shared_repos::SharedRepositories;
use use_cases::{
    admin_users::AdminUserHandler, blog::BlogHandler, certifications::CertificationHandler,
    contact::ContactHandler, projects::ProjectHandler, skills::SkillHandler,
};

pub struct AppState {
    pub app_name: String,
    pub pool: SqlitePool,
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub certification_handler: AppCertificationHandler,
    pub blog_handler: AppBlogHandler,
    pub contact_handler: AppContactHandler,
    pub admin_user_handler: AppAdminUserHandler,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;
pub type AppCertificationHandler = CertificationHandler<SqlxCertificationRepo>;
pub type AppBlogHandler = BlogHandler<SqlxBlogPostRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactMessageRepo>;
pub type AppAdminUserHandler = AdminUserHandler<SqlxAdminUserRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: SqlitePool) -> Self {
        let repos = SharedRepositories::new(pool.clone());

        AppState {
            app_name: config.name.clone(),
            pool,
            project_handler: ProjectHandler::new(repos.project_repo),
            skill_handler: SkillHandler::new(repos.skill_repo),
            certification_handler: CertificationHandler::new(repos.certification_repo),
            blog_handler: BlogHandler::new(repos.blog_post_repo),
            contact_handler: ContactHandler::new(repos.contact_repo),
            admin_user_handler: AdminUserHandler::new(repos.admin_user_repo),
        }
    }
}
