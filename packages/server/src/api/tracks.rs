//! Track endpoints: listing with filters, single-track lookup, and stream URL
//! resolution.

use actix_web::{
    Result, Scope,
    dev::{ServiceFactory, ServiceRequest},
    route,
    web::{self, Json},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tunebox_catalog::{Catalog, TrackFilters, filter_tracks};
use tunebox_middleware::api_version::ApiVersion;
use tunebox_music_models::api::ApiTrack;
use tunebox_paging::{Page, PagingRequest, deserialize_lenient_u32};

use super::{ApiError, ApiResponse, parse_id};

/// Binds track API endpoints to an Actix-web scope.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope
        .service(tracks_endpoint)
        .service(track_endpoint)
        .service(track_stream_endpoint)
}

/// `OpenAPI` documentation structure for the track endpoints.
#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(
    tags((name = "Tracks")),
    paths(tracks_endpoint, track_endpoint, track_stream_endpoint)
)]
pub struct Api;

/// Query parameters for the track listing endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTracksQuery {
    /// Genre to filter by (case-insensitive exact match).
    genre: Option<String>,
    /// Artist name substring to filter by (case-insensitive).
    artist: Option<String>,
    /// 1-based page number.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    page: Option<u32>,
    /// Page size.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    limit: Option<u32>,
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Tracks"],
        get,
        path = "/tracks",
        description = "Get tracks with optional filtering and pagination",
        params(
            ("genre" = Option<String>, Query, description = "Genre to filter by"),
            ("artist" = Option<String>, Query, description = "Artist name substring to filter by"),
            ("page" = Option<u32>, Query, description = "The 1-based page number"),
            ("limit" = Option<u32>, Query, description = "The page size"),
        ),
        responses(
            (
                status = 200,
                description = "Page of track records",
                body = Value,
            )
        )
    )
)]
#[route("/tracks", method = "GET")]
pub async fn tracks_endpoint(
    query: web::Query<GetTracksQuery>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<Vec<ApiTrack>>>> {
    let filters = TrackFilters {
        genre: query.genre.as_ref().map(|s| s.to_lowercase()),
        artist: query.artist.as_ref().map(|s| s.to_lowercase()),
    };

    let filtered = filter_tracks(catalog.tracks(), &filters);
    let page = Page::paginate(filtered, &PagingRequest::new(query.page, query.limit));

    Ok(Json(ApiResponse::paginated(page.into(), &version)))
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Tracks"],
        get,
        path = "/tracks/{trackId}",
        description = "Get a single track by id",
        params(
            ("trackId" = u64, Path, description = "The track id"),
        ),
        responses(
            (
                status = 200,
                description = "The track record",
                body = Value,
            ),
            (
                status = 404,
                description = "The track id has no matching record",
                body = Value,
            )
        )
    )
)]
#[route("/tracks/{trackId}", method = "GET")]
pub async fn track_endpoint(
    path: web::Path<String>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<ApiTrack>>, ApiError> {
    let track = parse_id(&path)
        .and_then(|id| catalog.track(id))
        .ok_or(ApiError::NotFound("Track"))?;

    Ok(Json(ApiResponse::of(track.clone().into(), &version)))
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Tracks"],
        get,
        path = "/tracks/{trackId}/stream",
        description = "Get the stream URL for a track",
        params(
            ("trackId" = u64, Path, description = "The track id"),
        ),
        responses(
            (
                status = 200,
                description = "The track's stream URL",
                body = Value,
            ),
            (
                status = 404,
                description = "The track id has no matching record",
                body = Value,
            )
        )
    )
)]
#[route("/tracks/{trackId}/stream", method = "GET")]
pub async fn track_stream_endpoint(
    path: web::Path<String>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let track = parse_id(&path)
        .and_then(|id| catalog.track(id))
        .ok_or(ApiError::NotFound("Track"))?;

    Ok(Json(ApiResponse::of(
        json!({ "streamUrl": track.stream_url }),
        &version,
    )))
}
