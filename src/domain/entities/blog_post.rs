use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    entities::text_list::{deserialize_flag, serialize_flag, TextList},
    errors::AppError,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct BlogPostRow {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
    pub published: Option<bool>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub tags: TextList,
    #[serde(serialize_with = "serialize_flag", deserialize_with = "deserialize_flag")]
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostInsert {
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub tags: TextList,
    pub published: bool,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogPostCreatedResponse {
    pub message: String,
    pub id: i64,
    pub slug: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,

    /// Derived from the title when absent or blank.
    pub slug: Option<String>,

    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,

    #[serde(default)]
    pub tags: TextList,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub published: bool,
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: row.id,
            title: row.title,
            slug: row.slug.unwrap_or_default(),
            content: row.content,
            excerpt: row.excerpt,
            author: row.author,
            tags: TextList::from_joined(row.tags.as_deref()),
            published: row.published.unwrap_or(false),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl TryFrom<NewBlogPostRequest> for BlogPostInsert {
    type Error = AppError;

    fn try_from(value: NewBlogPostRequest) -> Result<Self, Self::Error> {
        value.validate()?;
        let title = value.title.ok_or_else(|| AppError::missing_field("title"))?;

        // Generate slug if not provided
        let slug = match value.slug.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => {
                let generated = slug::slugify(&title);
                if generated.is_empty() {
                    let mut errors = ValidationErrors::new();
                    errors.add(
                        "slug",
                        new_validation_error(
                            "slug_empty",
                            "Could not derive a slug from the title; please provide one",
                        ),
                    );
                    return Err(errors.into());
                }
                generated
            }
        };

        Ok(BlogPostInsert {
            title,
            slug,
            content: value.content,
            excerpt: value.excerpt,
            author: value.author,
            tags: value.tags,
            published: value.published,
        })
    }
}
