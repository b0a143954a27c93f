//! Storage abstraction for users.
//!
//! The trait keeps the HTTP layer store-agnostic: handlers and service code
//! are exercised in tests against [`InMemoryUserRepository`] while production
//! wires in the Postgres implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in the store.
    async fn list(&self) -> UserResult<Vec<User>>;

    /// `None` when no user has the given id.
    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Inserts a new user and returns it with its assigned id.
    async fn create(&self, name: String, email: String) -> UserResult<User>;

    /// `None` when the update touched no rows.
    async fn update(&self, id: i32, name: String, email: String) -> UserResult<Option<User>>;

    /// `false` when no user had the given id.
    async fn delete(&self, id: i32) -> UserResult<bool>;
}

/// HashMap-backed repository for tests and local development.
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            // Ids start at 1; 0 is never a valid user id.
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|user| user.id);
        Ok(all)
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, name: String, email: String) -> UserResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User { id, name, email };

        let mut users = self.users.write().await;
        users.insert(id, user.clone());
        tracing::info!(user_id = id, "created user");
        Ok(user)
    }

    async fn update(&self, id: i32, name: String, email: String) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.name = name;
                user.email = email;
                tracing::info!(user_id = id, "updated user");
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        let mut users = self.users.write().await;
        let removed = users.remove(&id).is_some();
        if removed {
            tracing::info!(user_id = id, "deleted user");
        }
        Ok(removed)
    }
}
