//! Response headers shared by every route, and the fallback for unrouted
//! requests.
//!
//! Browser clients call the API from arbitrary origins, so every response
//! advertises permissive CORS headers and preflight requests on any path
//! succeed with `204 No Content`.

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse};

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Content type of every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Message returned for requests that match no route.
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Methods advertised to CORS clients.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Middleware adding CORS headers and the default JSON content type.
///
/// Headers already set by a handler are left untouched, which is how the
/// HTML docs page keeps its own content type.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mockbank::inbound::http::headers::api_headers;
///
/// let _app = App::new().wrap(api_headers());
/// ```
#[must_use]
pub fn api_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .add((CONTENT_TYPE, JSON_CONTENT_TYPE))
}

/// Default service: answer CORS preflight on any path, 404 otherwise.
pub async fn preflight_or_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    if req.method() == Method::OPTIONS {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(ENDPOINT_NOT_FOUND))
    }
}
