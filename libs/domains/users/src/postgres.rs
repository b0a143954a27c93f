//! Postgres-backed [`UserRepository`] built on SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::entity::{ActiveModel, Column, Entity};
use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Schema bootstrap DDL, applied at startup. Idempotent.
pub const USERS_TABLE_DDL: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)";

pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let models = Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(User::from))
    }

    async fn create(&self, name: String, email: String) -> UserResult<User> {
        let model = ActiveModel {
            name: Set(name),
            email: Set(email),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(user_id = model.id, "created user");
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, name: String, email: String) -> UserResult<Option<User>> {
        let result = Entity::update_many()
            .col_expr(Column::Name, Expr::value(name.clone()))
            .col_expr(Column::Email, Expr::value(email.clone()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::info!(user_id = id, "updated user");
        Ok(Some(User { id, name, email }))
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        // Existence probe first so a missing row maps cleanly to not-found.
        if Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(false);
        }

        Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::info!(user_id = id, "deleted user");
        Ok(true)
    }
}
