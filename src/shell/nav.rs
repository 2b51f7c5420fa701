//! Sidebar navigation model and active-state rules.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// How a group decides it contains the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMatch {
    pub prefixes: &'static [&'static str],
    pub exact: &'static [&'static str],
}

impl GroupMatch {
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix)) || self.exact.contains(&path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavLink],
    pub active_when: GroupMatch,
    /// Items highlight only on an exact path match.
    pub exact_items: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    Group(NavGroup),
}

const CRM_ITEMS: &[NavLink] = &[
    link("Leads", "/leads"),
    link("Campaigns", "/campaigns"),
    link("Pipeline", "/pipeline"),
    link("Deals", "/deals"),
];

const MARKETING_ITEMS: &[NavLink] = &[link("Content Library", "/content"), link("Campaigns", "/campaigns")];

const CLIENT_ITEMS: &[NavLink] = &[
    link("All Clients", "/clients"),
    link("Sessions", "/sessions"),
    link("Projects", "/projects"),
];

pub const KNOWLEDGE_ITEMS: &[NavLink] = &[
    link("All Documents", "/knowledge"),
    link("Branding & Assets", "/knowledge/branding"),
    link("Compliance & Legal", "/knowledge/compliance"),
    link("Credentials & Security", "/knowledge/credentials"),
    link("Customer & Support", "/knowledge/customer-support"),
    link("Digital Presence & IT", "/knowledge/digital-it"),
    link("Finance & Billing", "/knowledge/finance"),
    link("Innovation & R&D", "/knowledge/innovation"),
    link("Investor Relations", "/knowledge/investor-relations"),
    link("Marketing & Brand", "/knowledge/marketing"),
    link("Metrics & Dashboard", "/knowledge/metrics"),
    link("Misc & General Ops", "/knowledge/misc-ops"),
    link("SaaS & Tech", "/knowledge/saas-tech"),
    link("Sales & Growth", "/knowledge/sales"),
    link("Startup Launch", "/knowledge/startup-launch"),
    link("Team & Culture", "/knowledge/team-culture"),
    link("Automations", "/knowledge/automations"),
    link("GitHub & Internal", "/knowledge/github-internal"),
    link("Product Docs & Runbooks", "/knowledge/product-docs"),
    link("AI Exports", "/knowledge/ai-exports"),
];

pub const SIDEBAR: &[NavEntry] = &[
    NavEntry::Link(link("Home", "/dashboard")),
    NavEntry::Link(link("Strategic Hub", "/strategy")),
    NavEntry::Link(link("Metrics Dashboard", "/metrics")),
    NavEntry::Link(link("Brainstorming", "/brainstorming")),
    NavEntry::Link(link("Website Manager", "/website")),
    NavEntry::Group(NavGroup {
        label: "CRM",
        items: CRM_ITEMS,
        active_when: GroupMatch { prefixes: &["/leads"], exact: &["/pipeline", "/deals"] },
        exact_items: false,
    }),
    NavEntry::Group(NavGroup {
        label: "Marketing",
        items: MARKETING_ITEMS,
        active_when: GroupMatch { prefixes: &["/content"], exact: &["/campaigns"] },
        exact_items: false,
    }),
    NavEntry::Link(link("Products", "/products")),
    NavEntry::Link(link("Services", "/services")),
    NavEntry::Link(link("Sales Hub", "/sales")),
    NavEntry::Group(NavGroup {
        label: "Clients",
        items: CLIENT_ITEMS,
        active_when: GroupMatch { prefixes: &["/clients"], exact: &["/sessions", "/projects"] },
        exact_items: false,
    }),
    NavEntry::Group(NavGroup {
        label: "Knowledge Hub",
        items: KNOWLEDGE_ITEMS,
        active_when: GroupMatch { prefixes: &["/knowledge"], exact: &[] },
        exact_items: true,
    }),
    NavEntry::Link(link("Data Sources", "/data-sources")),
    NavEntry::Link(link("Integrations", "/integrations")),
    NavEntry::Link(link("Settings", "/settings")),
];

/// Whether a link to `href` is highlighted while `path` is displayed.
///
/// `/dashboard` matches only itself; other links also cover their subpaths.
#[must_use]
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/dashboard" {
        return path == href;
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

impl NavGroup {
    #[must_use]
    pub fn item_active(&self, item: &NavLink, path: &str) -> bool {
        if self.exact_items { path == item.href } else { is_active(item.href, path) }
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
