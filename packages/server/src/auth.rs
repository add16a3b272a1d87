//! HTTP Basic authentication middleware for the admin scope.
//!
//! This middleware guards `/admin/*` with a static username/password pair,
//! enabled with the `basic-auth` feature. No admin routes are currently
//! mounted behind the gate; the scope exists so the credential check is
//! exercised end to end when admin functionality lands.

use std::future::{Ready, ready};

use actix_web::{
    HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    error::InternalError,
    http,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use futures::future::LocalBoxFuture;

/// Basic authentication middleware factory.
///
/// Requests are authenticated via an `Authorization: Basic` header carrying
/// the configured username and password. OPTIONS requests bypass
/// authentication so CORS preflight keeps working.
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates a new basic authentication middleware.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BasicAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BasicAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthMiddleware {
            service,
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }
}

/// The actual middleware service that performs the credential check.
///
/// This is created by the [`BasicAuth`] factory and processes individual
/// requests.
pub struct BasicAuthMiddleware<S> {
    service: S,
    username: String,
    password: String,
}

impl<S, B> Service<ServiceRequest> for BasicAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.method() == http::Method::OPTIONS {
            return Box::pin(self.service.call(req));
        }

        if is_authorized(&req, &self.username, &self.password) {
            return Box::pin(self.service.call(req));
        }

        log::warn!(
            "Unauthorized BasicAuthMiddleware {} request to '{}'",
            req.method(),
            req.path(),
        );

        let response = HttpResponse::Unauthorized()
            .insert_header((
                http::header::WWW_AUTHENTICATE,
                "Basic realm=\"TuneBox admin\"",
            ))
            .finish();

        Box::pin(ready(Err(
            InternalError::from_response("Unauthorized", response).into()
        )))
    }
}

fn is_authorized(req: &ServiceRequest, username: &str, password: &str) -> bool {
    let Some(auth) = req.headers().get(http::header::AUTHORIZATION) else {
        log::debug!("No AUTHORIZATION header value");
        return false;
    };
    let Ok(auth) = auth.to_str() else {
        log::debug!("Invalid AUTHORIZATION header value");
        return false;
    };
    let Some(encoded) = auth.strip_prefix("Basic ") else {
        log::debug!("AUTHORIZATION header is not a Basic credential");
        return false;
    };
    let Ok(decoded) = BASE64_STANDARD.decode(encoded.trim()) else {
        log::debug!("Invalid base64 in AUTHORIZATION header");
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        log::debug!("Invalid UTF-8 in AUTHORIZATION header");
        return false;
    };

    decoded
        .split_once(':')
        .is_some_and(|(user, pass)| user == username && pass == password)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};
    use pretty_assertions::assert_eq;

    use super::*;

    async fn status_with_header(header: Option<&str>) -> StatusCode {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(BasicAuth::new("admin".to_string(), "hunter2".to_string()))
                    .route("/ping", web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/admin/ping");
        if let Some(value) = header {
            req = req.insert_header((http::header::AUTHORIZATION, value));
        }

        match test::try_call_service(&app, req.to_request()).await {
            Ok(resp) => resp.status(),
            Err(err) => err.error_response().status(),
        }
    }

    #[actix_web::test]
    async fn missing_credentials_are_rejected_with_challenge() {
        assert_eq!(status_with_header(None).await, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn wrong_credentials_are_rejected() {
        // base64("admin:wrong")
        let status = status_with_header(Some("Basic YWRtaW46d3Jvbmc=")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn correct_credentials_are_accepted() {
        // base64("admin:hunter2")
        let status = status_with_header(Some("Basic YWRtaW46aHVudGVyMg==")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn rejection_carries_the_basic_challenge_header() {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(BasicAuth::new("admin".to_string(), "hunter2".to_string()))
                    .route("/ping", web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin/ping").to_request();
        let resp = match test::try_call_service(&app, req).await {
            Ok(resp) => resp.into_parts().1.map_into_boxed_body(),
            Err(err) => err.error_response(),
        };

        assert_eq!(
            resp.headers()
                .get(http::header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Basic realm=\"TuneBox admin\"")
        );
    }
}
