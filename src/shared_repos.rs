use sqlx::SqlitePool;

use crate::repositories::sqlx_repo::{
    SqlxAdminUserRepo, SqlxBlogPostRepo, SqlxCertificationRepo, SqlxContactMessageRepo,
    SqlxProjectRepo, SqlxSkillRepo,
};

/// One repository per table, all sharing the same pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: SqlxProjectRepo,
    pub skill_repo: SqlxSkillRepo,
    pub certification_repo: SqlxCertificationRepo,
    pub blog_post_repo: SqlxBlogPostRepo,
    pub contact_repo: SqlxContactMessageRepo,
    pub admin_user_repo: SqlxAdminUserRepo,
}

impl SharedRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        SharedRepositories {
            project_repo: SqlxProjectRepo::new(pool.clone()),
            skill_repo: SqlxSkillRepo::new(pool.clone()),
            certification_repo: SqlxCertificationRepo::new(pool.clone()),
            blog_post_repo: SqlxBlogPostRepo::new(pool.clone()),
            contact_repo: SqlxContactMessageRepo::new(pool.clone()),
            admin_user_repo: SqlxAdminUserRepo::new(pool),
        }
    }
}
