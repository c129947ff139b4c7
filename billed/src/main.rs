//! Server entry-point: wires page handlers, health checks and sessions.

use std::env;

use actix_session::{
    SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore,
};
use actix_web::body::MessageBody;
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use ortho_config::OrthoConfig;
use reqwest::Client;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use billed::Trace;
use billed::config::ServerSettings;
use billed::inbound::http::health::{HealthState, live, ready};
use billed::inbound::http::pages::{index, page};
use billed::inbound::http::sign_in::demo_sign_in;
use billed::inbound::http::state::{BillsSource, HttpState};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let key = session_key()?;
    let http_state = web::Data::new(HttpState::new(bills_source(&settings)?));
    let health_state = web::Data::new(HealthState::new());
    let cookie_secure = settings.cookie_secure();
    let demo = settings.use_fixtures();

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            key.clone(),
            cookie_secure,
            demo,
        )
    })
    .bind(settings.bind_addr())?;

    info!(bind_addr = settings.bind_addr(), "server listening");
    health_state.mark_ready();
    server.run().await
}

fn session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

fn bills_source(settings: &ServerSettings) -> std::io::Result<BillsSource> {
    if settings.use_fixtures() {
        info!("serving fixture bills");
        return Ok(BillsSource::Fixtures);
    }
    let base_url = settings.api_base_url().map_err(std::io::Error::other)?;
    let client = Client::builder()
        .timeout(settings.request_timeout())
        .build()
        .map_err(|e| std::io::Error::other(format!("failed to build HTTP client: {e}")))?;
    info!(api_base_url = %base_url, "calling bills API");
    Ok(BillsSource::api(client, &base_url))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    demo: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build();

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(|cfg| {
            if demo {
                cfg.service(demo_sign_in);
            }
        })
        .service(index)
        .service(page)
}
