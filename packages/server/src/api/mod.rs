//! HTTP API endpoints for the TuneBox server.
//!
//! Each resource has its own module binding endpoints onto the shared
//! `/api/v1` scope. Every response body, success or failure, is the uniform
//! envelope built by [`ApiResponse`]: `success` plus `data` (or `message` on
//! failure), the stamped API `version`, and `pagination` on list endpoints.

use actix_web::{
    HttpResponse, Result, Scope,
    dev::{ServiceFactory, ServiceRequest},
    error::ResponseError,
    http::StatusCode,
    route,
    web::Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tunebox_middleware::api_version::{self, ApiVersion};
use tunebox_paging::{Page, Pagination};

pub mod artists;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod playlists;
pub mod search;
pub mod tracks;

/// Binds all versioned resource endpoints to an Actix-web scope.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    let scope = tracks::bind_services(scope);
    let scope = artists::bind_services(scope);
    let scope = playlists::bind_services(scope);
    search::bind_services(scope)
}

/// Errors surfaced to API consumers.
///
/// Failure bodies keep the envelope shape rather than actix's plain-text
/// error pages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested id has no matching record.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A required query parameter was absent or empty.
    #[error("{0}")]
    BadRequest(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("{self}");
        HttpResponse::build(self.status_code()).json(ApiResponse::error(self.to_string()))
    }
}

/// The uniform response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Endpoint-specific payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure message, present instead of `data` on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The stamped API version.
    pub version: String,
    /// Pagination metadata, present only on paginated list endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Wraps a successful payload in the envelope.
    #[must_use]
    pub fn of(data: T, version: &ApiVersion) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            version: version.to_string(),
            pagination: None,
        }
    }
}

impl ApiResponse<()> {
    /// Wraps a failure message in the envelope.
    ///
    /// Built outside of a request context, so the version comes from the
    /// process-wide stamp.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            version: api_version::get().to_string(),
            pagination: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a page of items in the envelope, with pagination metadata.
    #[must_use]
    pub fn paginated(page: Page<T>, version: &ApiVersion) -> Self {
        let pagination = page.pagination();

        Self {
            success: true,
            data: Some(page.into_items()),
            message: None,
            version: version.to_string(),
            pagination: Some(pagination),
        }
    }
}

/// Parses a path id leniently.
///
/// A non-numeric id never matches any record and falls through to the
/// resource's not-found response, matching the permissive handling of numeric
/// query parameters.
pub(crate) fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Health"],
        get,
        path = "/health",
        description = "Health check",
        responses(
            (
                status = 200,
                description = "Server status, API versions, and server time",
                body = Value,
            )
        )
    )
)]
#[route("/health", method = "GET")]
pub async fn health_endpoint(version: ApiVersion) -> Result<Json<Value>> {
    log::trace!("Healthy");
    Ok(Json(json!({
        "status": "healthy",
        "version": std::env!("CARGO_PKG_VERSION"),
        "apiVersions": [version.as_str()],
        "serverTime": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })))
}


#[cfg(test)]
mod tests {
    use actix_web::App;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn health_endpoint_reports_healthy() {
        let app = actix_web::test::init_service(App::new().service(health_endpoint)).await;

        let req = actix_web::test::TestRequest::get()
            .uri("/health")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["apiVersions"], serde_json::json!(["1.0"]));
        assert!(body["serverTime"].as_str().is_some_and(|t| t.contains('T')));
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[test]
    fn success_envelope_omits_message_and_pagination() {
        let version = ApiVersion::new("1.0");
        let body = serde_json::to_value(ApiResponse::of(42, &version)).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 42);
        assert_eq!(body["version"], "1.0");
        assert!(body.get("message").is_none());
        assert!(body.get("pagination").is_none());
    }

    #[test]
    fn error_envelope_carries_message_and_version_instead_of_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("Track not found")).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Track not found");
        assert!(body.get("data").is_none());
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[test]
    fn not_found_error_renders_404_envelope() {
        let err = ApiError::NotFound("Track");
        let resp = err.error_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
    }
}
