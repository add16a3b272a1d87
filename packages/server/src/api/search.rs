//! The global search endpoint across tracks, artists, and playlists.

use actix_web::{
    Result, Scope,
    dev::{ServiceFactory, ServiceRequest},
    route,
    web::{self, Json},
};
use serde::Deserialize;
use tunebox_catalog::Catalog;
use tunebox_middleware::api_version::ApiVersion;
use tunebox_music_models::api::ApiSearchResults;

use super::{ApiError, ApiResponse};

/// Binds the search endpoint to an Actix-web scope.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope.service(search_endpoint)
}

/// `OpenAPI` documentation structure for the search endpoint.
#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(tags((name = "Search")), paths(search_endpoint))]
pub struct Api;

/// Query parameters for the search endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// The search query. Required; an absent or empty value is an input error.
    q: Option<String>,
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Search"],
        get,
        path = "/search",
        description = "Search tracks, artists, and playlists",
        params(
            ("q" = String, Query, description = "The search query"),
        ),
        responses(
            (
                status = 200,
                description = "Matching tracks, artists, and playlists",
                body = Value,
            ),
            (
                status = 400,
                description = "The search query was absent or empty",
                body = Value,
            )
        )
    )
)]
#[route("/search", method = "GET")]
pub async fn search_endpoint(
    query: web::Query<SearchQuery>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<ApiSearchResults>>, ApiError> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::BadRequest("Search query is required"))?;

    let results = catalog.search(q);

    Ok(Json(ApiResponse::of(
        ApiSearchResults {
            tracks: results.tracks.into_iter().map(Into::into).collect(),
            artists: results.artists.into_iter().map(Into::into).collect(),
            playlists: results.playlists.into_iter().map(Into::into).collect(),
        },
        &version,
    )))
}
