//! Playlist endpoints: listing with name filtering and single-playlist lookup
//! with track resolution.

use actix_web::{
    Result, Scope,
    dev::{ServiceFactory, ServiceRequest},
    route,
    web::{self, Json},
};
use serde::Deserialize;
use tunebox_catalog::{Catalog, filter_playlists};
use tunebox_middleware::api_version::ApiVersion;
use tunebox_music_models::api::{ApiPlaylist, ApiPlaylistWithTracks};
use tunebox_paging::{Page, PagingRequest, deserialize_lenient_u32};

use super::{ApiError, ApiResponse, parse_id};

/// Binds playlist API endpoints to an Actix-web scope.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope
        .service(playlists_endpoint)
        .service(playlist_endpoint)
}

/// `OpenAPI` documentation structure for the playlist endpoints.
#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(tags((name = "Playlists")), paths(playlists_endpoint, playlist_endpoint))]
pub struct Api;

/// Query parameters for the playlist listing endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPlaylistsQuery {
    /// Playlist name substring to filter by (case-insensitive).
    name: Option<String>,
    /// 1-based page number.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    page: Option<u32>,
    /// Page size.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    limit: Option<u32>,
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Playlists"],
        get,
        path = "/playlists",
        description = "Get playlists with optional name filtering and pagination",
        params(
            ("name" = Option<String>, Query, description = "Playlist name substring to filter by"),
            ("page" = Option<u32>, Query, description = "The 1-based page number"),
            ("limit" = Option<u32>, Query, description = "The page size"),
        ),
        responses(
            (
                status = 200,
                description = "Page of playlist records",
                body = Value,
            )
        )
    )
)]
#[route("/playlists", method = "GET")]
pub async fn playlists_endpoint(
    query: web::Query<GetPlaylistsQuery>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<Vec<ApiPlaylist>>>> {
    let name = query.name.as_ref().map(|s| s.to_lowercase());
    let filtered = filter_playlists(catalog.playlists(), name.as_deref());
    let page = Page::paginate(filtered, &PagingRequest::new(query.page, query.limit));

    Ok(Json(ApiResponse::paginated(page.into(), &version)))
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Playlists"],
        get,
        path = "/playlists/{playlistId}",
        description = "Get a single playlist by id, with its tracks resolved to full records",
        params(
            ("playlistId" = u64, Path, description = "The playlist id"),
        ),
        responses(
            (
                status = 200,
                description = "The playlist record with resolved tracks",
                body = Value,
            ),
            (
                status = 404,
                description = "The playlist id has no matching record",
                body = Value,
            )
        )
    )
)]
#[route("/playlists/{playlistId}", method = "GET")]
pub async fn playlist_endpoint(
    path: web::Path<String>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<ApiPlaylistWithTracks>>, ApiError> {
    let playlist = parse_id(&path)
        .and_then(|id| catalog.playlist(id))
        .ok_or(ApiError::NotFound("Playlist"))?
        .clone();

    let tracks = catalog.playlist_tracks(&playlist);

    Ok(Json(ApiResponse::of(
        ApiPlaylistWithTracks::new(playlist, tracks),
        &version,
    )))
}
