//! Demonstration sign-in for fixture deployments.
//!
//! ```text
//! POST /demo/sign-in {"type":"Employee","email":"a@a","token":"..."}
//! ```
//!
//! The payload is trusted as-is: the identity and optional bearer token are
//! written to the session cookie and the browser is sent to the role's
//! landing page. `main` only registers [`demo_sign_in`] when fixture bills are
//! served; API deployments rely on an external login service writing the
//! same session entries.

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use tracing::info;

use super::ApiResult;
use super::session::SessionContext;
use crate::app::RoutePath;
use crate::domain::{Identity, Role};

/// Identity to sign in as.
#[derive(Debug, Deserialize)]
pub struct DemoSignInRequest {
    #[serde(flatten)]
    identity: Identity,
    #[serde(default)]
    token: Option<String>,
}

/// Persist the posted identity and redirect to its landing page.
#[post("/demo/sign-in")]
pub async fn demo_sign_in(
    session: SessionContext,
    payload: web::Json<DemoSignInRequest>,
) -> ApiResult<HttpResponse> {
    let DemoSignInRequest { identity, token } = payload.into_inner();
    session.persist_identity(&identity)?;
    if let Some(token) = token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        session.persist_token(token)?;
    }
    info!(role = ?identity.role(), "demo identity signed in");
    Ok(HttpResponse::SeeOther()
        .insert_header((LOCATION, landing_location(identity.role())))
        .finish())
}

fn landing_location(role: Role) -> String {
    let landing = match role {
        Role::Employee => RoutePath::Bills,
        Role::Admin => RoutePath::Dashboard,
    };
    format!("/{}", landing.as_str().trim_start_matches('#'))
}
