//! `OpenAPI` documentation aggregation for the TuneBox server.
//!
//! Collects the per-resource `Api` documents under the `/api/v1` prefix and
//! serves the combined spec as raw JSON.

use actix_web::{
    Result, Scope,
    dev::{ServiceFactory, ServiceRequest},
    route,
    web::Json,
};
use utoipa::{OpenApi as _, openapi::OpenApi};

#[derive(utoipa::OpenApi)]
#[openapi()]
struct ApiDoc;

/// Builds the combined `OpenAPI` document for all mounted endpoints.
#[must_use]
pub fn init() -> OpenApi {
    fn nest_api(api: OpenApi, path: &str, mut nested: OpenApi) -> OpenApi {
        nested.paths.paths.iter_mut().for_each(|(path, item)| {
            [
                &mut item.get,
                &mut item.put,
                &mut item.post,
                &mut item.delete,
                &mut item.options,
                &mut item.head,
                &mut item.patch,
                &mut item.trace,
            ]
            .into_iter()
            .flatten()
            .for_each(|operation| {
                operation.operation_id = Some(path.to_owned());
            });
        });

        api.nest(path, nested)
    }

    let api = ApiDoc::openapi();
    let api = nest_api(api, "/api/v1", super::tracks::Api::openapi());
    let api = nest_api(api, "/api/v1", super::artists::Api::openapi());
    let api = nest_api(api, "/api/v1", super::playlists::Api::openapi());
    nest_api(api, "/api/v1", super::search::Api::openapi())
}

static OPENAPI: std::sync::OnceLock<OpenApi> = std::sync::OnceLock::new();

#[route("/openapi.json", method = "GET")]
async fn openapi_json_endpoint() -> Result<Json<OpenApi>> {
    Ok(Json(OPENAPI.get_or_init(init).clone()))
}

/// Binds the `OpenAPI` spec endpoint to an Actix-web scope.
#[must_use]
pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope.service(openapi_json_endpoint)
}
