use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::text_list::{deserialize_flag, serialize_flag, TextList},
    errors::AppError,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub technologies: TextList,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<String>,
    #[serde(serialize_with = "serialize_flag", deserialize_with = "deserialize_flag")]
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

/// Column values written by both insert and full-overwrite update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: Option<String>,
    pub technologies: TextList,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<String>,
    pub featured: bool,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Request body for creating a project and for replacing one in place.
/// Updates overwrite every column, so omitted fields are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub technologies: TextList,

    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListQuery {
    pub featured: Option<String>,
}

impl ProjectListQuery {
    /// Only the literal `featured=true` narrows the listing.
    pub fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            technologies: TextList::from_joined(row.technologies.as_deref()),
            image_url: row.image_url,
            project_url: row.project_url,
            github_url: row.github_url,
            category: row.category,
            featured: row.featured.unwrap_or(false),
            created_at: row.created_at,
        }
    }
}

impl TryFrom<ProjectRequest> for ProjectInsert {
    type Error = AppError;

    fn try_from(value: ProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ProjectInsert {
            title: value.title.ok_or_else(|| AppError::missing_field("title"))?,
            description: value.description,
            technologies: value.technologies,
            image_url: value.image_url,
            project_url: value.project_url,
            github_url: value.github_url,
            category: value.category,
            featured: value.featured,
        })
    }
}
