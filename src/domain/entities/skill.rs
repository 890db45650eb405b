use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub proficiency: Option<i64>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillInsert {
    pub name: String,
    pub category: Option<String>,
    pub proficiency: Option<i64>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,

    pub category: Option<String>,

    #[validate(range(min = 0, max = 100, message = "proficiency must be between 0 and 100"))]
    pub proficiency: Option<i64>,

    pub icon: Option<String>,
}

impl TryFrom<NewSkillRequest> for SkillInsert {
    type Error = AppError;

    fn try_from(value: NewSkillRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(SkillInsert {
            name: value.name.ok_or_else(|| AppError::missing_field("name"))?,
            category: value.category,
            proficiency: value.proficiency,
            icon: value.icon,
        })
    }
}
