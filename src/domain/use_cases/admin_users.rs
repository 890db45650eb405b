use crate::{
    auth::password::{hash_password, verify_password},
    entities::admin_user::{AdminUser, NewAdminUser},
    errors::AppError,
    repositories::admin_user::AdminUserRepository,
};

pub struct AdminUserHandler<R>
where
    R: AdminUserRepository,
{
    pub admin_repo: R,
}

impl<R> AdminUserHandler<R>
where
    R: AdminUserRepository,
{
    pub fn new(admin_repo: R) -> Self {
        AdminUserHandler { admin_repo }
    }

    /// Hashes the password and stores the account; returns the new ID
    pub async fn create_admin_user(&self, request: NewAdminUser) -> Result<i64, AppError> {
        let insert = request.prepare_for_insert(|password| Ok(hash_password(password)?))?;

        self.admin_repo.create_admin_user(&insert).await
    }

    /// Returns the account when `password` matches its stored hash
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUser>, AppError> {
        let Some(user) = self.admin_repo.get_admin_user_by_username(username).await? else {
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::admin_user::MockAdminUserRepository;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn stores_hash_instead_of_password() {
        let captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let mut repo = MockAdminUserRepository::new();
        repo.expect_create_admin_user().returning(move |user| {
            *sink.lock().unwrap() = Some(user.password_hash.clone());
            Ok(1)
        });

        let handler = AdminUserHandler::new(repo);
        let id = handler
            .create_admin_user(NewAdminUser {
                username: Some("admin".into()),
                password: Some("s3cret!".into()),
                email: None,
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
        let hash = captured.lock().unwrap().clone().unwrap();
        assert_ne!(hash, "s3cret!");
        assert!(verify_password("s3cret!", &hash).unwrap());
    }

    #[tokio::test]
    async fn missing_password_never_reaches_the_store() {
        let mut repo = MockAdminUserRepository::new();
        repo.expect_create_admin_user().never();

        let handler = AdminUserHandler::new(repo);
        let err = handler
            .create_admin_user(NewAdminUser {
                username: Some("admin".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn verifies_credentials_against_stored_hash() {
        let hash = hash_password("letmein").unwrap();
        let mut repo = MockAdminUserRepository::new();
        repo.expect_get_admin_user_by_username().returning(move |username| {
            Ok((username == "admin").then(|| AdminUser {
                id: 1,
                username: "admin".into(),
                password_hash: hash.clone(),
                email: None,
                created_at: Default::default(),
            }))
        });

        let handler = AdminUserHandler::new(repo);
        assert!(handler.verify_credentials("admin", "letmein").await.unwrap().is_some());
        assert!(handler.verify_credentials("admin", "wrong").await.unwrap().is_none());
        assert!(handler.verify_credentials("ghost", "letmein").await.unwrap().is_none());
    }
}
