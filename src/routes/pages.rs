//! Page routes: one handler per row of the route table.

use axum::Router;
use axum::extract::Query;
use axum::http::{StatusCode, Uri};
use axum::middleware;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use serde::Deserialize;

use super::gate::access_gate;
use crate::access::Capability;
use crate::pages::{ROUTES, RouteSpec, compose};
use crate::shell::{ShellContext, render_document, render_status_page};
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no page at {path}")]
    NotFound { path: String },
    #[error("this page requires the {capability} capability")]
    Forbidden { capability: Capability },
    #[error("page could not be rendered: {message}")]
    Render { message: String },
}

impl PageError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Not Found",
            Self::Forbidden { .. } => "Access Denied",
            Self::Render { .. } => "Server Error",
        }
    }
}

impl From<askama::Error> for PageError {
    fn from(e: askama::Error) -> Self {
        Self::Render { message: e.to_string() }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status(), Html(render_status_page(self.title(), &self.to_string()))).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Query flags the shell reacts to. Anything else in the query is ignored.
#[derive(Debug, Default, Deserialize)]
struct ShellQuery {
    #[serde(default)]
    demo_restricted: bool,
}

/// Register every row of [`ROUTES`] behind the access gate.
pub fn router(state: AppState) -> Router<AppState> {
    let mut router = Router::new();
    for route in ROUTES {
        router = router.route(route.pattern, get(move |uri: Uri| async move { render_page(route, &uri) }));
    }
    router.route_layer(middleware::from_fn_with_state(state, access_gate))
}

fn render_page(route: &RouteSpec, uri: &Uri) -> Result<Html<String>, PageError> {
    let path = uri.path();
    let param = if route.param.is_parameterized() {
        let segment = raw_segment(route.pattern, path).ok_or_else(|| PageError::NotFound { path: path.to_owned() })?;
        Some(segment.to_owned())
    } else {
        None
    };

    // A malformed query is not worth failing the page over.
    let query = Query::<ShellQuery>::try_from_uri(uri).map(|Query(q)| q).unwrap_or_default();

    let tree = compose(route, param);
    tracing::debug!(pattern = route.pattern, view = route.view.component_name(), "rendering page");
    let ctx = ShellContext { path, demo_restricted: query.demo_restricted };
    Ok(Html(render_document(&tree, &ctx)?))
}

/// The dynamic segment exactly as it appears in the request path.
///
/// The router has already matched `pattern`, so the path is the pattern's
/// static prefix followed by one non-empty segment. Taken from the raw URI so
/// the value reaches the view without percent-decoding.
pub(crate) fn raw_segment<'a>(pattern: &str, path: &'a str) -> Option<&'a str> {
    let prefix = &pattern[..pattern.find('{')?];
    path.strip_prefix(prefix)
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))
}

/// Where a trailing-slash path should go: the same path and query without the
/// trailing slashes. `None` for `/`, for paths without a trailing slash, and
/// for anything that would collapse into a scheme-relative `//host` target.
pub(crate) fn trailing_slash_target(uri: &Uri) -> Option<String> {
    let path = uri.path();
    let trimmed = path.trim_end_matches('/');
    if trimmed.len() == path.len() || trimmed.is_empty() || trimmed.starts_with("//") {
        return None;
    }
    Some(match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_owned(),
    })
}

/// Fallback for any path outside the route table.
///
/// `/dashboard/` and friends redirect permanently to the slash-less path, so
/// they reach the page the way the client router would send them.
pub async fn not_found(uri: Uri) -> Response {
    if let Some(target) = trailing_slash_target(&uri) {
        tracing::debug!(path = uri.path(), %target, "trimming trailing slash");
        return Redirect::permanent(&target).into_response();
    }
    tracing::debug!(path = uri.path(), "no page");
    PageError::NotFound { path: uri.path().to_owned() }.into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
