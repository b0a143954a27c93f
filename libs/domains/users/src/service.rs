//! Business layer between HTTP handlers and the repository.
//!
//! Input validation happens in the handlers; the service maps repository
//! absence signals (`None` / `false`) to [`UserError::NotFound`].

use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserPayload};
use crate::repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    pub async fn create_user(&self, payload: UserPayload) -> UserResult<User> {
        self.repository.create(payload.name, payload.email).await
    }

    pub async fn update_user(&self, id: i32, payload: UserPayload) -> UserResult<User> {
        self.repository
            .update(id, payload.name, payload.email)
            .await?
            .ok_or(UserError::NotFound)
    }

    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound)
        }
    }
}
