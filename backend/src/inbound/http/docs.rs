//! API documentation endpoints: the generated OpenAPI document and an HTML
//! page rendering it with Swagger UI.

use actix_web::{HttpResponse, get, web};
use utoipa::OpenApi;

use crate::doc::ApiDoc;
use crate::inbound::http::headers::JSON_CONTENT_TYPE;

/// Paths answering `GET` with the documentation page.
pub const DOCS_PATHS: [&str; 4] = ["/", "/docs", "/swagger", "/swagger.html"];

/// Location of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Mock banking API</title>
  <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.11.0/swagger-ui.css" />
  <style> body { margin: 0; } </style>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5.11.0/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/api-docs/openapi.json",
        dom_id: "#swagger-ui",
        deepLinking: true
      });
    };
  </script>
</body>
</html>
"##;

/// Serve the Swagger UI page. Registered on every path in [`DOCS_PATHS`].
pub async fn docs_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(DOCS_PAGE)
}

/// Serve the OpenAPI document generated from the handler annotations.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(JSON_CONTENT_TYPE)
        .json(ApiDoc::openapi())
}

/// Register the documentation routes on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(DOCS_PATHS.to_vec())
            .guard(actix_web::guard::Get())
            .to(docs_page),
    )
    .service(openapi_json);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("/")]
    #[case("/docs")]
    #[case("/swagger")]
    #[case("/swagger.html")]
    #[actix_web::test]
    async fn docs_page_is_served_as_html(#[case] uri: &str) {
        let app = test::init_service(App::new().configure(configure)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert!(res.status().is_success());
        assert_eq!(
            res.headers()
                .get("content-type")
                .and_then(|value| value.to_str().ok()),
            Some(HTML_CONTENT_TYPE)
        );
        let body = test::read_body(res).await;
        let page = std::str::from_utf8(&body).expect("utf8 page");
        assert!(page.contains(OPENAPI_PATH));
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
    }

    #[actix_web::test]
    async fn docs_page_only_answers_get() {
        let app = test::init_service(App::new().configure(configure)).await;

        let res =
            test::call_service(&app, test::TestRequest::post().uri("/docs").to_request()).await;

        assert_eq!(res.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn openapi_document_lists_user_paths() {
        let app = test::init_service(App::new().configure(configure)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri(OPENAPI_PATH).to_request())
                .await;

        assert!(res.status().is_success());
        let doc: Value = test::read_body_json(res).await;
        assert!(doc["paths"]["/users"]["get"].is_object());
        assert!(doc["paths"]["/users/{id}"]["delete"].is_object());
    }
}
