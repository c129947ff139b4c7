//! Health endpoints.
//!
//! Readiness reports which bills source the page handlers were built with,
//! and stays 503 until `main` has bound the listener. Liveness answers 200
//! for as long as the process serves requests.

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

use super::state::{BillsSource, HttpState};

/// Readiness flag flipped once the server is listening.
#[derive(Debug, Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// State for a server that is not listening yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether the listener is bound.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessReport<'a> {
    status: &'static str,
    bills_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bills_endpoint: Option<&'a str>,
}

impl<'a> ReadinessReport<'a> {
    fn new(listening: bool, source: &'a BillsSource) -> Self {
        let (bills_source, bills_endpoint) = match source {
            BillsSource::Fixtures => ("fixtures", None),
            BillsSource::Api { endpoint, .. } => ("api", Some(endpoint.as_str())),
        };
        Self {
            status: if listening { "ready" } else { "starting" },
            bills_source,
            bills_endpoint,
        }
    }
}

/// Readiness check: 200 with the bills source once listening, 503 before.
#[get("/health/ready")]
pub async fn ready(health: web::Data<HealthState>, pages: web::Data<HttpState>) -> HttpResponse {
    let listening = health.is_ready();
    let mut response = if listening {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ReadinessReport::new(listening, &pages.bills))
}

/// Liveness check.
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use reqwest::{Client, Url};
    use serde_json::{Value, json};

    async fn readiness(health: web::Data<HealthState>, source: BillsSource) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(health)
                .app_data(web::Data::new(HttpState::new(source)))
                .service(ready),
        )
        .await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request())
                .await;
        let status = res.status();
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        (status, test::read_body_json(res).await)
    }

    #[actix_rt::test]
    async fn readiness_waits_for_the_listener() {
        let health = web::Data::new(HealthState::new());

        let (status, body) = readiness(health.clone(), BillsSource::Fixtures).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({ "status": "starting", "billsSource": "fixtures" }));

        health.mark_ready();
        let (status, body) = readiness(health, BillsSource::Fixtures).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[actix_rt::test]
    async fn readiness_names_the_api_endpoint() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let base = Url::parse("https://api.billed.test/v1/").expect("valid base");

        let (status, body) = readiness(health, BillsSource::api(Client::new(), &base)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "ready",
                "billsSource": "api",
                "billsEndpoint": "https://api.billed.test/v1/bills",
            })
        );
    }

    #[actix_rt::test]
    async fn liveness_is_unconditional() {
        let app = test::init_service(App::new().service(live)).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
