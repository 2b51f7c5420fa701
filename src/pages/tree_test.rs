use super::*;
use crate::pages::{KNOWLEDGE_METADATA, ROUTES, find};

/// The view mounted inside the shell, with its props.
fn mounted(tree: &RenderTree) -> Option<(ViewKind, &ViewProps)> {
    let Node::Shell { children } = &tree.root else {
        return None;
    };
    children.iter().find_map(|child| match child {
        Node::View { view, props } => Some((*view, props)),
        Node::Shell { .. } => None,
    })
}

fn route(pattern: &str) -> &'static RouteSpec {
    find(pattern).unwrap_or_else(|| panic!("route {pattern} missing"))
}

#[test]
fn static_routes_compose_shell_with_single_unparameterized_view() {
    for route in ROUTES.iter().filter(|r| !r.param.is_parameterized()) {
        let tree = compose(route, None);
        let Node::Shell { children } = &tree.root else {
            panic!("{} is not rooted at the shell", route.pattern);
        };
        assert_eq!(children.len(), 1, "{} should have one child", route.pattern);
        assert_eq!(children[0], Node::View { view: route.view, props: ViewProps::Empty {} });
    }
}

#[test]
fn client_detail_receives_client_id() {
    let tree = compose(route("/clients/{id}"), Some("abc123".into()));
    assert_eq!(
        mounted(&tree),
        Some((ViewKind::ClientDetailView, &ViewProps::ClientId { client_id: "abc123".into() }))
    );
}

#[test]
fn knowledge_category_receives_category() {
    let tree = compose(route("/knowledge/{category}"), Some("onboarding".into()));
    assert_eq!(
        mounted(&tree),
        Some((ViewKind::KnowledgeView, &ViewProps::Category { category: "onboarding".into() }))
    );
}

#[test]
fn knowledge_hub_has_no_category_and_declares_metadata() {
    let tree = compose(route("/knowledge"), None);
    assert_eq!(mounted(&tree), Some((ViewKind::KnowledgeView, &ViewProps::Empty {})));
    assert_eq!(tree.metadata, KNOWLEDGE_METADATA);
    assert_eq!(tree.metadata.title, "Knowledge Hub | IntegrateWise OS");
    assert_eq!(tree.metadata.description, "Create and manage internal documentation and playbooks");
}

#[test]
fn shell_is_always_outermost() {
    for route in ROUTES {
        let param = route.param.is_parameterized().then(|| "x".to_owned());
        let tree = compose(route, param);
        assert!(matches!(tree.root, Node::Shell { .. }), "{} not rooted at shell", route.pattern);
    }
}

#[test]
fn parameter_values_are_not_transformed() {
    for raw in ["  Padded  ", "MiXeD-Case", "Acme%20Co", "caf%C3%A9", "a+b"] {
        let tree = compose(route("/clients/{id}"), Some(raw.to_owned()));
        assert_eq!(
            mounted(&tree).map(|(_, props)| props.clone()),
            Some(ViewProps::ClientId { client_id: raw.to_owned() }),
            "{raw:?} was altered"
        );
    }
}

#[test]
fn tree_serializes_with_camel_case_props() {
    let tree = compose(route("/clients/{id}"), Some("abc123".into()));
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["pattern"], "/clients/{id}");
    assert_eq!(json["root"]["node"], "shell");
    assert_eq!(json["root"]["children"][0]["node"], "view");
    assert_eq!(json["root"]["children"][0]["view"], "ClientDetailView");
    assert_eq!(json["root"]["children"][0]["props"]["clientId"], "abc123");
}

#[test]
fn empty_props_serialize_as_empty_object() {
    assert_eq!(ViewProps::Empty {}.to_json(), "{}");
    assert_eq!(ViewProps::Category { category: "sales".into() }.to_json(), r#"{"category":"sales"}"#);
}
