//! Users Domain
//!
//! Complete domain implementation for the `users` resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, check ordering
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Validator  │  ← pure field checks (name, email)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← maps repository outcomes to domain errors
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + implementations)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{DeleteConfirmation, User, UserPayload};
pub use postgres::{PgUserRepository, USERS_TABLE_DDL};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
