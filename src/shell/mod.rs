//! App shell: HTML chrome rendered around every page.
//!
//! DESIGN
//! ======
//! The shell is server-rendered from askama templates under `templates/`:
//! sidebar, header, demo banner and the optional demo-restricted notice. The
//! view itself is a mount point carrying its component name and JSON props;
//! the client bundle hydrates it. Templates only see flat, precomputed rows,
//! and askama escapes every interpolated value so path parameters cannot
//! inject markup.

pub mod nav;

use askama::Template;

use crate::pages::{Node, RenderTree};
use nav::{NavEntry, NavLink, SIDEBAR, is_active};

pub const APP_NAME: &str = "IntegrateWise OS";
pub const CLIENT_BUNDLE: &str = "/static/app.js";
pub const STYLESHEET: &str = "/static/app.css";

/// Per-request inputs to the chrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellContext<'a> {
    /// Request path, used for sidebar highlighting.
    pub path: &'a str,
    /// Set by `?demo_restricted=true` when a demo visitor was bounced from a
    /// restricted area.
    pub demo_restricted: bool,
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    description: &'a str,
    app_name: &'a str,
    stylesheet: &'a str,
    client_bundle: &'a str,
    sidebar: Vec<SidebarEntry>,
    demo_restricted: bool,
    mounts: Vec<MountPoint>,
}

#[derive(Template)]
#[template(path = "status.html")]
struct StatusTemplate<'a> {
    title: &'a str,
    description: &'a str,
    app_name: &'a str,
    stylesheet: &'a str,
    client_bundle: &'a str,
    heading: &'a str,
    message: &'a str,
}

/// One sidebar row. Groups carry their items; `active` on a group means
/// it renders expanded.
struct SidebarEntry {
    label: &'static str,
    href: &'static str,
    active: bool,
    group: bool,
    items: Vec<SidebarLink>,
}

struct SidebarLink {
    label: &'static str,
    href: &'static str,
    active: bool,
}

struct MountPoint {
    component: &'static str,
    props: String,
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a composed page as a complete HTML document.
///
/// # Errors
///
/// Returns the askama error if the template fails to render.
pub fn render_document(tree: &RenderTree, ctx: &ShellContext<'_>) -> askama::Result<String> {
    let mut mounts = Vec::new();
    collect_mounts(&tree.root, &mut mounts);

    PageTemplate {
        title: tree.metadata.title,
        description: tree.metadata.description,
        app_name: APP_NAME,
        stylesheet: STYLESHEET,
        client_bundle: CLIENT_BUNDLE,
        sidebar: sidebar(ctx.path),
        demo_restricted: ctx.demo_restricted,
        mounts,
    }
    .render()
}

/// Render a bare status page. Used for errors, so it carries no shell.
#[must_use]
pub fn render_status_page(title: &str, message: &str) -> String {
    let full_title = format!("{title} | {APP_NAME}");
    StatusTemplate {
        title: &full_title,
        description: "",
        app_name: APP_NAME,
        stylesheet: STYLESHEET,
        client_bundle: CLIENT_BUNDLE,
        heading: title,
        message,
    }
    .render()
    .unwrap_or_else(|e| format!("Template error: {e}"))
}

fn collect_mounts(node: &Node, out: &mut Vec<MountPoint>) {
    match node {
        Node::Shell { children } => {
            for child in children {
                collect_mounts(child, out);
            }
        }
        Node::View { view, props } => out.push(MountPoint {
            component: view.component_name(),
            props: props.to_json(),
        }),
    }
}

fn sidebar(path: &str) -> Vec<SidebarEntry> {
    SIDEBAR
        .iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => SidebarEntry {
                label: link.label,
                href: link.href,
                active: is_active(link.href, path),
                group: false,
                items: Vec::new(),
            },
            NavEntry::Group(group) => SidebarEntry {
                label: group.label,
                href: "",
                active: group.active_when.matches(path),
                group: true,
                items: group
                    .items
                    .iter()
                    .map(|item: &NavLink| SidebarLink {
                        label: item.label,
                        href: item.href,
                        active: group.item_active(item, path),
                    })
                    .collect(),
            },
        })
        .collect()
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
