use crate::{
    entities::{
        project::{Project, ProjectInsert, ProjectRequest},
        responses::{CreatedResponse, MessageResponse},
    },
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest first, optionally only the featured ones
    pub async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(featured_only).await
    }

    /// Retrieves a project by its ID
    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo.get_project_by_id(id).await
    }

    /// Validates and stores a new project
    pub async fn create_project(&self, request: ProjectRequest) -> Result<CreatedResponse, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        let id = self.project_repo.create_project(&insert).await?;

        Ok(CreatedResponse::new("Project created", id))
    }

    /// Replaces every mutable column of an existing project
    pub async fn update_project(
        &self,
        id: i64,
        request: ProjectRequest,
    ) -> Result<MessageResponse, AppError> {
        let changes = ProjectInsert::try_from(request)?;

        self.project_repo.update_project(id, &changes).await?;

        Ok(MessageResponse::new("Project updated"))
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.project_repo.delete_project(id).await?;

        Ok(MessageResponse::new("Project deleted"))
    }
}
