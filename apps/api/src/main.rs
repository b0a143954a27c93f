use axum::Router;
use axum_helpers::server::create_app;
use axum_helpers::{create_cors_layer, health_router, not_found};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{handlers, PgUserRepository, UserService, USERS_TABLE_DDL};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod ready;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre before any fallible operations
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "starting"
    );

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::bootstrap_schema(&db, USERS_TABLE_DDL)
        .await
        .map_err(|e| eyre::eyre!("Schema bootstrap failed: {}", e))?;

    let service = UserService::new(PgUserRepository::new(db.clone()));

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            handlers::ApiDoc::openapi(),
        ))
        .nest("/users", handlers::router(service))
        .merge(health_router(config.app.clone()))
        .merge(ready::ready_router(db.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer());

    create_app(router, &config.server).await?;

    info!("shutting down");
    db.close().await?;

    Ok(())
}
