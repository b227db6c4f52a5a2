//! User CRUD handlers.
//!
//! ```text
//! GET    /users
//! POST   /users        {"name": "Ana"}
//! GET    /users/{id}
//! PUT    /users/{id}   {"name": "Ana Silva", ...}
//! DELETE /users/{id}
//! ```
//!
//! Path segments and bodies are taken raw and parsed in
//! [`validation`](crate::inbound::http::validation) so that every rejection
//! uses the `{"error": ...}` envelope.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::headers::JSON_CONTENT_TYPE;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_new_user, parse_replacement, parse_user_id};

/// List every user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mockbank::inbound::http::users::list_users;
///
/// let _app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Every stored user", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list_users().await?;
    Ok(HttpResponse::Ok().content_type(JSON_CONTENT_TYPE).json(users))
}

/// Create a user. The store assigns the identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "Stored user with its identifier", body = User),
        (status = 400, description = "Missing name or unparsable body", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = parse_new_user(&body)?;
    let user = state.users_command.create_user(draft).await?;
    Ok(HttpResponse::Created()
        .content_type(JSON_CONTENT_TYPE)
        .json(user))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Stored user", body = User),
        (status = 400, description = "Invalid user ID", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state.users.find_user(id).await?;
    Ok(HttpResponse::Ok().content_type(JSON_CONTENT_TYPE).json(user))
}

/// Replace every field of a user except its identifier.
///
/// The body is parsed before the lookup, so a malformed body is rejected
/// even when the identifier is unknown.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserDraft,
    responses(
        (status = 200, description = "Replaced user", body = User),
        (status = 400, description = "Invalid user ID or unparsable body", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
#[put("/users/{id}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let draft = parse_replacement(&body)?;
    let user = state.users_command.replace_user(id, draft).await?;
    Ok(HttpResponse::Ok().content_type(JSON_CONTENT_TYPE).json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register every user handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(get_user)
        .service(replace_user)
        .service(delete_user);
}
