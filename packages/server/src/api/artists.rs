//! Artist endpoints: listing, single-artist lookup, and the artist's-tracks
//! relation.

use actix_web::{
    Result, Scope,
    dev::{ServiceFactory, ServiceRequest},
    route,
    web::{self, Json},
};
use serde::Deserialize;
use tunebox_catalog::Catalog;
use tunebox_middleware::api_version::ApiVersion;
use tunebox_music_models::api::{ApiArtist, ApiTrack};
use tunebox_paging::{Page, PagingRequest, deserialize_lenient_u32};

use super::{ApiError, ApiResponse, parse_id};

/// Binds artist API endpoints to an Actix-web scope.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope
        .service(artists_endpoint)
        .service(artist_endpoint)
        .service(artist_tracks_endpoint)
}

/// `OpenAPI` documentation structure for the artist endpoints.
#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(
    tags((name = "Artists")),
    paths(artists_endpoint, artist_endpoint, artist_tracks_endpoint)
)]
pub struct Api;

/// Query parameters for the artist listing endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetArtistsQuery {
    /// 1-based page number.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    page: Option<u32>,
    /// Page size.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    limit: Option<u32>,
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Artists"],
        get,
        path = "/artists",
        description = "Get artists with pagination",
        params(
            ("page" = Option<u32>, Query, description = "The 1-based page number"),
            ("limit" = Option<u32>, Query, description = "The page size"),
        ),
        responses(
            (
                status = 200,
                description = "Page of artist records",
                body = Value,
            )
        )
    )
)]
#[route("/artists", method = "GET")]
pub async fn artists_endpoint(
    query: web::Query<GetArtistsQuery>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<Vec<ApiArtist>>>> {
    let page = Page::paginate(
        catalog.artists().to_vec(),
        &PagingRequest::new(query.page, query.limit),
    );

    Ok(Json(ApiResponse::paginated(page.into(), &version)))
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Artists"],
        get,
        path = "/artists/{artistId}",
        description = "Get a single artist by id",
        params(
            ("artistId" = u64, Path, description = "The artist id"),
        ),
        responses(
            (
                status = 200,
                description = "The artist record",
                body = Value,
            ),
            (
                status = 404,
                description = "The artist id has no matching record",
                body = Value,
            )
        )
    )
)]
#[route("/artists/{artistId}", method = "GET")]
pub async fn artist_endpoint(
    path: web::Path<String>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<ApiArtist>>, ApiError> {
    let artist = parse_id(&path)
        .and_then(|id| catalog.artist(id))
        .ok_or(ApiError::NotFound("Artist"))?;

    Ok(Json(ApiResponse::of(artist.clone().into(), &version)))
}

#[cfg_attr(
    feature = "openapi", utoipa::path(
        tags = ["Artists"],
        get,
        path = "/artists/{artistId}/tracks",
        description = "Get all tracks credited to an artist",
        params(
            ("artistId" = u64, Path, description = "The artist id"),
        ),
        responses(
            (
                status = 200,
                description = "The artist's track records",
                body = Value,
            ),
            (
                status = 404,
                description = "The artist id has no matching record",
                body = Value,
            )
        )
    )
)]
#[route("/artists/{artistId}/tracks", method = "GET")]
pub async fn artist_tracks_endpoint(
    path: web::Path<String>,
    catalog: web::Data<Catalog>,
    version: ApiVersion,
) -> Result<Json<ApiResponse<Vec<ApiTrack>>>, ApiError> {
    let artist = parse_id(&path)
        .and_then(|id| catalog.artist(id))
        .ok_or(ApiError::NotFound("Artist"))?;

    let tracks = catalog
        .artist_tracks(artist)
        .into_iter()
        .map(ApiTrack::from)
        .collect();

    Ok(Json(ApiResponse::of(tracks, &version)))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use crate::api::test_data;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(test_data::catalog()))
                .service(super::bind_services(actix_web::web::scope("/api/v1"))),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();

        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn lists_artists_with_pagination_metadata() {
        let (status, body) = get("/api/v1/artists").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["pagination"]["total"], 2);
    }

    #[actix_web::test]
    async fn returns_single_artist_by_id() {
        let (status, body) = get("/api/v1/artists/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Queen");
        assert_eq!(body["data"]["country"], "United Kingdom");
        assert!(body.get("pagination").is_none());
    }

    #[actix_web::test]
    async fn unknown_artist_id_returns_404_envelope() {
        let (status, body) = get("/api/v1/artists/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Artist not found");
    }

    #[actix_web::test]
    async fn artist_tracks_joins_on_exact_artist_name() {
        let (status, body) = get("/api/v1/artists/1/tracks").await;

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|t| t["artist"] == "The Weeknd"));
    }

    #[actix_web::test]
    async fn artist_tracks_returns_404_for_unknown_artist() {
        let (status, body) = get("/api/v1/artists/99/tracks").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Artist not found");
    }
}
