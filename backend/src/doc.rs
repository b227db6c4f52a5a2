//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the user CRUD endpoints and health probes from the
//! inbound layer together with the record schemas. The document is served
//! at `/api-docs/openapi.json`, rendered by the HTML docs page and printed
//! by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Account, Card, Feature, News, User, UserDraft};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock banking API",
        description = "Local replica of a banking user API: CRUD over user records \
                       (account, card, features and news) persisted in a JSON file.",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::replace_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserDraft, Account, Card, Feature, News, ErrorBody)),
    tags(
        (name = "users", description = "User record CRUD"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
