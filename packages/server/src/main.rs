#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The TuneBox HTTP server binary.
//!
//! Serves the read-only music catalog API on `0.0.0.0` at the port given as
//! the first argument, the `PORT` environment variable, or 8000.

mod api;
#[cfg(feature = "basic-auth")]
mod auth;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware, web};
use tunebox_middleware::api_version::{self, ApiVersion, DEFAULT_API_VERSION};

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: &str = "tunebox=trace";
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: &str = "tunebox=info";

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_LEVEL),
    )
    .init();

    if api_version::init(ApiVersion::new(DEFAULT_API_VERSION)).is_err() {
        log::warn!("API version was already initialized");
    }

    let args: Vec<String> = std::env::args().collect();

    let service_port = if args.len() > 1 {
        args[1].parse::<u16>().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Invalid port: {e}"))
        })?
    } else {
        std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(8000)
    };

    let catalog = web::Data::new(tunebox_catalog::sample::sample_catalog());

    log::info!("Starting TuneBox server on port {service_port}");

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string());

            let mut cors = Cors::default()
                .allowed_methods(["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers([
                    http::header::CONTENT_TYPE,
                    http::header::AUTHORIZATION,
                    http::header::HeaderName::from_static("x-api-version"),
                ])
                .supports_credentials()
                .max_age(86400);

            for origin in allowed_origins.split(',').map(str::trim) {
                cors = cors.allowed_origin(origin);
            }

            let app = App::new()
                .wrap(cors)
                .wrap(middleware::Logger::default())
                .wrap(middleware::Compress::default())
                .app_data(catalog.clone())
                .service(api::health_endpoint)
                .service(api::bind_services(web::scope("/api/v1")));

            #[cfg(feature = "openapi")]
            let app = app.service(api::openapi::bind_services(web::scope("")));

            // The admin scope carries no routes yet, so every request under
            // it that clears the credential check still 404s.
            #[cfg(feature = "basic-auth")]
            let app = app.service(
                web::scope("/admin").wrap(auth::BasicAuth::new(
                    std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                    std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
                )),
            );

            app
        })
        .bind(("0.0.0.0", service_port))?
        .run()
        .await
    })
}
