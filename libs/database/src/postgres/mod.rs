//! PostgreSQL database connector and utilities
//!
//! Provides connection management, startup schema bootstrap, and health checks.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{
    bootstrap_schema, connect, connect_from_config, connect_from_config_with_retry,
    connect_with_options,
};
pub use health::{check_health, check_health_detailed, HealthStatus};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
