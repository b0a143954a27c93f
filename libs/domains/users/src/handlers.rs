//! HTTP handlers and router for the users API.
//!
//! Validation order is fixed: body decode, then name, then email, then the
//! path id. The id therefore arrives as a raw string and is parsed inside
//! each handler after the field checks have passed.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

use axum_helpers::errors::ErrorResponse;

use crate::error::{UserError, UserResult};
use crate::models::{DeleteConfirmation, User, UserPayload};
use crate::repository::UserRepository;
use crate::service::UserService;
use crate::validation::{validate_email, validate_name};

#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(User, UserPayload, DeleteConfirmation, ErrorResponse)),
    tags((name = "users", description = "User management endpoints"))
)]
pub struct ApiDoc;

/// Builds the users router. Mount under `/users`.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let state = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_users).post(create_user).options(preflight),
        )
        .route(
            "/{id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .options(preflight),
        )
        .with_state(state)
}

/// Positive i32 or [`UserError::InvalidUserId`].
fn parse_user_id(raw: &str) -> UserResult<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(UserError::InvalidUserId)
}

fn decode_payload(
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> UserResult<UserPayload> {
    let Json(payload) = payload.map_err(|_| UserError::InvalidJsonBody)?;
    validate_name(&payload.name)?;
    validate_email(&payload.email)?;
    Ok(payload)
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> UserResult<impl IntoResponse> {
    let payload = decode_payload(payload)?;
    let user = service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> UserResult<Json<User>> {
    // Body checks run before the id parse.
    let payload = decode_payload(payload)?;
    let id = parse_user_id(&id)?;
    let user = service.update_user(id, payload).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = DeleteConfirmation),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<DeleteConfirmation>> {
    let id = parse_user_id(&id)?;
    service.delete_user(id).await?;
    Ok(Json(DeleteConfirmation::user_deleted()))
}

/// CORS preflight terminator. The CORS layer fills in the headers.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_accepts_positive_integers() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert_eq!(parse_user_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn test_parse_user_id_rejects_non_positive_and_garbage() {
        for raw in ["0", "-1", "abc", "1.5", "", "2147483648"] {
            assert!(
                matches!(parse_user_id(raw), Err(UserError::InvalidUserId)),
                "expected rejection for {:?}",
                raw
            );
        }
    }
}
