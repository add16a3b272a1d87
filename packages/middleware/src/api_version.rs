//! API version stamp accessible via Actix-web request extraction.
//!
//! Every response body carries the API version string. The version is
//! configured once at startup with [`init`] and read per request by extracting
//! [`ApiVersion`] in handlers, or via [`get`] outside of a request context
//! (error responses, for example).
//!
//! # Example
//!
//! ```rust
//! use actix_web::{web, App, HttpResponse, HttpServer};
//! use tunebox_middleware::api_version::{self, ApiVersion};
//!
//! async fn handler(version: ApiVersion) -> HttpResponse {
//!     HttpResponse::Ok().body(format!("API version: {version}"))
//! }
//!
//! # fn example() -> std::io::Result<()> {
//! // Initialize before starting the server
//! api_version::init(ApiVersion::new("1.0")).expect("Failed to initialize API version");
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .route("/", web::get().to(handler))
//! })
//! .bind(("127.0.0.1", 8080))?
//! .run()
//! # ;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, OnceLock};

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures::future::{Ready, ok};

static API_VERSION: OnceLock<ApiVersion> = OnceLock::new();

/// Version stamped on responses when [`init`] was never called.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Initializes the process-wide API version.
///
/// This should be called once before starting the server.
///
/// # Errors
///
/// * Returns `Err(ApiVersion)` if the version has already been initialized
pub fn init(version: ApiVersion) -> Result<(), ApiVersion> {
    API_VERSION.set(version)
}

/// Returns the configured API version, or [`DEFAULT_API_VERSION`] when
/// [`init`] was never called.
#[must_use]
pub fn get() -> ApiVersion {
    API_VERSION
        .get()
        .cloned()
        .unwrap_or_else(|| ApiVersion::new(DEFAULT_API_VERSION))
}

/// The API version string stamped on every response.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(Arc<str>);

impl ApiVersion {
    /// Creates an API version from a version string.
    #[must_use]
    pub fn new(version: &str) -> Self {
        Self(version.into())
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromRequest for ApiVersion {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, actix_web::Error>>;

    /// Extracts the configured API version; never fails.
    fn from_request(_req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ok(get())
    }
}
