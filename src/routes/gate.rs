//! Access gate: capability check in front of every page route.

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use super::pages::PageError;
use crate::access::{DEMO_SESSION_COOKIE, Session};
use crate::config::ServerConfig;
use crate::pages;
use crate::state::AppState;

pub(crate) fn demo_session_cookie(config: &ServerConfig) -> Cookie<'static> {
    Cookie::build((DEMO_SESSION_COOKIE, "true"))
        .path("/")
        .http_only(false)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::days(config.demo_session_max_age_days))
        .build()
}

/// Route-layer middleware for page routes.
///
/// Anonymous visitors get a demo session cookie and are let through.
/// Identified sessions must hold the matched route's capability.
pub async fn access_gate(
    State(state): State<AppState>,
    matched: MatchedPath,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Result<Response, PageError> {
    if !state.config.access_gate {
        return Ok(next.run(req).await);
    }

    let Some(session) = Session::from_cookies(&jar) else {
        tracing::debug!(path = matched.as_str(), "issuing demo session");
        let jar = jar.add(demo_session_cookie(&state.config));
        return Ok((jar, next.run(req).await).into_response());
    };

    if let Some(route) = pages::find(matched.as_str()) {
        if !session.allows(route.capability) {
            tracing::info!(
                path = route.pattern,
                role = %session.role,
                demo = session.demo,
                capability = %route.capability,
                "page access denied"
            );
            return Err(PageError::Forbidden { capability: route.capability });
        }
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
