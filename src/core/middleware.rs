use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Check an `Authorization: Basic ...` header against "username:password"
fn basic_auth_matches(auth_header: Option<&str>, credentials: &str) -> bool {
    auth_header
        .and_then(|h| h.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok())
        .is_some_and(|creds| creds == credentials)
}

/// Guards the API docs with HTTP basic auth
pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if basic_auth_matches(auth_header, &credentials) {
                return Ok(next.run(req).await);
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(creds: &str) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(creds))
    }

    #[test]
    fn test_basic_auth_accepts_matching_credentials() {
        assert!(basic_auth_matches(
            Some(&basic("admin:secret")),
            "admin:secret"
        ));
    }

    #[test]
    fn test_basic_auth_rejects_everything_else() {
        assert!(!basic_auth_matches(None, "admin:secret"));
        assert!(!basic_auth_matches(Some(&basic("admin:wrong")), "admin:secret"));
        assert!(!basic_auth_matches(Some("Bearer abc"), "admin:secret"));
        assert!(!basic_auth_matches(Some("Basic not-base64!"), "admin:secret"));
    }

    #[test]
    fn test_request_ids_are_uuid_v7() {
        let request = axum::http::Request::new(());
        let id = MakeRequestUuid.make_request_id(&request).unwrap();
        let parsed = Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();

        assert_eq!(parsed.get_version_num(), 7);
    }
}
