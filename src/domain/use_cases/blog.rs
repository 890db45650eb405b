use crate::{
    entities::blog_post::{BlogPost, BlogPostCreatedResponse, BlogPostInsert, NewBlogPostRequest},
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
};

pub struct BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogHandler { blog_post_repo }
    }

    /// Creates a new blog post, deriving the slug from the title if needed
    pub async fn create_blog_post(
        &self,
        post: NewBlogPostRequest,
    ) -> Result<BlogPostCreatedResponse, AppError> {
        let insert_post = BlogPostInsert::try_from(post)?;

        let id = self.blog_post_repo.create_blog_post(&insert_post).await?;

        Ok(BlogPostCreatedResponse {
            message: "Post created".to_string(),
            id,
            slug: insert_post.slug,
        })
    }

    /// Published posts, newest first
    pub async fn list_published_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.blog_post_repo.list_published_posts().await
    }

    /// A published post by slug; drafts are reported as missing
    pub async fn get_published_post(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.blog_post_repo.get_published_post_by_slug(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::blog_post::MockBlogPostRepository;

    #[tokio::test]
    async fn generated_slug_is_returned() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_create_blog_post()
            .withf(|p| p.slug == "hello-rust")
            .returning(|_| Ok(5));

        let handler = BlogHandler::new(repo);
        let response = handler
            .create_blog_post(NewBlogPostRequest {
                title: Some("Hello Rust".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.id, 5);
        assert_eq!(response.slug, "hello-rust");
    }

    #[tokio::test]
    async fn conflict_from_store_is_not_masked() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_create_blog_post()
            .returning(|_| Err(AppError::Conflict("Slug already exists: hello".into())));

        let handler = BlogHandler::new(repo);
        let err = handler
            .create_blog_post(NewBlogPostRequest {
                title: Some("Hello".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
