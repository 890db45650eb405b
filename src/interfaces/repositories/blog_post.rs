use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert, BlogPostRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxBlogPostRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Sync + Send {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i64, AppError>;
    async fn get_blog_post_by_id(&self, id: i64) -> Result<BlogPost, AppError>;
    async fn get_published_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError>;
    async fn list_published_posts(&self) -> Result<Vec<BlogPost>, AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO blog_posts (title, slug, content, excerpt, author, tags, published)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.author)
        .bind(post.tags.to_joined())
        .bind(post.published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict(format!("Slug already exists: {}", post.slug));
                }
            }
            error!("Failed to create blog post: {}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }

    async fn get_blog_post_by_id(&self, id: i64) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPostRow>("SELECT * FROM blog_posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch blog post {}: {}", id, e);
                AppError::from(e)
            })?
            .map(BlogPost::from)
            .ok_or_else(|| AppError::NotFound("Post not found".into()))
    }

    async fn get_published_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPostRow>(
            "SELECT * FROM blog_posts WHERE slug = ? AND published = 1"
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch blog post {}: {}", slug, e);
            AppError::from(e)
        })?
        .map(BlogPost::from)
        .ok_or_else(|| AppError::NotFound("Post not found".into()))
    }

    async fn list_published_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let posts = sqlx::query_as::<_, BlogPostRow>(
            "SELECT * FROM blog_posts WHERE published = 1 ORDER BY created_at DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list blog posts: {}", e);
            AppError::from(e)
        })?
        .into_iter()
        .map(BlogPost::from)
        .collect();

        Ok(posts)
    }
}
