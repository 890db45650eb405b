use crate::{
    entities::{
        responses::CreatedResponse,
        skill::{NewSkillRequest, Skill, SkillInsert},
    },
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<CreatedResponse, AppError> {
        let insert = SkillInsert::try_from(request)?;
        let id = self.skill_repo.create_skill(&insert).await?;

        Ok(CreatedResponse::new("Skill created", id))
    }
}
