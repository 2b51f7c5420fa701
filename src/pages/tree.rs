//! Page composition: the shell wrapping a single view.

use serde::Serialize;

use super::{PageMetadata, RouteSpec, ViewKind, ViewProps};

/// One node of a composed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Shell { children: Vec<Node> },
    View { view: ViewKind, props: ViewProps },
}

/// A composed page ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub pattern: &'static str,
    #[serde(skip)]
    pub metadata: PageMetadata,
    pub root: Node,
}

/// Compose `Shell(View(props))` for a route and its resolved parameter.
///
/// The parameter is forwarded exactly as the router resolved it.
#[must_use]
pub fn compose(route: &RouteSpec, param: Option<String>) -> RenderTree {
    let view = Node::View { view: route.view, props: route.param.props(param) };
    RenderTree { pattern: route.pattern, metadata: route.head_metadata(), root: Node::Shell { children: vec![view] } }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
