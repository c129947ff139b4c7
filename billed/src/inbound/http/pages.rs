//! Page handlers.
//!
//! ```text
//! GET /                  login page
//! GET /employee/bills    page for #employee/bills
//! ```
//!
//! Each request builds a fresh router over the session's storage entries,
//! navigates once, and returns the full document. Register [`page`] after
//! every other service; it matches any path.

use std::sync::Arc;

use actix_web::http::header::{CACHE_CONTROL, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};
use tracing::debug;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use crate::app::{RoutePath, Router, RouterPorts};
use crate::domain::ports::KeyValueStorage;
use crate::outbound::InlineModal;
use crate::views::shell;

/// Render the login page.
#[get("/")]
pub async fn index(session: SessionContext, state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(RoutePath::Login.as_str(), &session, &state).await
}

/// Render the page for `#{route}`.
#[get("/{route:.*}")]
pub async fn page(
    route: web::Path<String>,
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let path = format!("#{}", route.into_inner());
    render_page(&path, &session, &state).await
}

async fn render_page(
    path: &str,
    session: &SessionContext,
    state: &HttpState,
) -> ApiResult<HttpResponse> {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(session.to_storage()?);
    let router = Router::new(RouterPorts {
        storage: Arc::clone(&storage),
        gateway: Some(state.gateway(storage)),
        modal: Arc::new(InlineModal::new(state.modal_width)),
    });
    router.navigate(path).await;

    let status = if RoutePath::resolve(path).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    debug!(path, status = status.as_u16(), "page rendered");
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .insert_header((CACHE_CONTROL, "no-store"))
        .body(shell::document(&router.root_html())))
}
