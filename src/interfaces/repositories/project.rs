use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::error;

use crate::{
    entities::project::{Project, ProjectInsert, ProjectRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<i64, AppError>;
    async fn update_project(&self, id: i64, project: &ProjectInsert) -> Result<(), AppError>;
    async fn delete_project(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM projects");

        if featured_only {
            builder.push(" WHERE featured = 1");
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        let projects = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to list projects: {}", e);
                AppError::from(e)
            })?
            .into_iter()
            .map(Project::from)
            .collect();

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError> {
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch project {}: {}", id, e);
                AppError::from(e)
            })?
            .map(Project::from)
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (
                title, description, technologies, image_url,
                project_url, github_url, category, featured
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.technologies.to_joined())
        .bind(&project.image_url)
        .bind(&project.project_url)
        .bind(&project.github_url)
        .bind(&project.category)
        .bind(project.featured)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create project: {}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }

    async fn update_project(&self, id: i64, project: &ProjectInsert) -> Result<(), AppError> {
        // Full overwrite: every mutable column takes the supplied value
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                title = ?,
                description = ?,
                technologies = ?,
                image_url = ?,
                project_url = ?,
                github_url = ?,
                category = ?,
                featured = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.technologies.to_joined())
        .bind(&project.image_url)
        .bind(&project.project_url)
        .bind(&project.github_url)
        .bind(&project.category)
        .bind(project.featured)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to update project {}: {}", id, e);
            AppError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }

    async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to delete project {}: {}", id, e);
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
