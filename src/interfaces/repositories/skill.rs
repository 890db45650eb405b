use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

use crate::{
    entities::skill::{Skill, SkillInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError>;
    async fn create_skill(&self, skill: &SkillInsert) -> Result<i64, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills ORDER BY category, proficiency DESC, id"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list skills: {}", e);
            AppError::from(e)
        })?;

        Ok(skills)
    }

    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch skill {}: {}", id, e);
                AppError::from(e)
            })?
            .ok_or_else(|| AppError::NotFound("Skill not found".into()))
    }

    async fn create_skill(&self, skill: &SkillInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO skills (name, category, proficiency, icon)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create skill: {}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }
}
