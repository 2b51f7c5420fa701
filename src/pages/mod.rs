//! Route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page of the application is one row in [`ROUTES`]: a URL pattern,
//! the view it mounts inside the shell, the shape of its single optional
//! path parameter, and static head metadata. The router registers each row
//! once; handlers never hand-write a shell+view binding.

pub mod tree;
pub mod view;

use crate::access::Capability;

pub use tree::{Node, RenderTree, compose};
pub use view::{ViewKind, ViewProps};

/// Static `<head>` metadata a route can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// Head metadata for routes that declare none of their own.
pub const DEFAULT_METADATA: PageMetadata = PageMetadata {
    title: "IntegrateWise - Your Business Command Center",
    description: "The AI-powered operating system for modern businesses. Connect all your tools, \
                  automate workflows, and get intelligent insights.",
};

pub const KNOWLEDGE_METADATA: PageMetadata = PageMetadata {
    title: "Knowledge Hub | IntegrateWise OS",
    description: "Create and manage internal documentation and playbooks",
};

/// How a route's dynamic segment maps onto view props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    None,
    ClientId,
    Category,
}

impl ParamShape {
    /// Build view props from the resolved segment. The value is not touched.
    #[must_use]
    pub fn props(self, value: Option<String>) -> ViewProps {
        match (self, value) {
            (Self::ClientId, Some(client_id)) => ViewProps::ClientId { client_id },
            (Self::Category, Some(category)) => ViewProps::Category { category },
            _ => ViewProps::Empty {},
        }
    }

    #[must_use]
    pub fn is_parameterized(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    /// Axum path pattern, `{name}` for the dynamic segment.
    pub pattern: &'static str,
    pub view: ViewKind,
    pub param: ParamShape,
    pub metadata: Option<PageMetadata>,
    pub capability: Capability,
}

impl RouteSpec {
    const fn page(pattern: &'static str, view: ViewKind) -> Self {
        Self { pattern, view, param: ParamShape::None, metadata: None, capability: Capability::ViewOverview }
    }

    const fn with_param(self, param: ParamShape) -> Self {
        Self { param, ..self }
    }

    const fn with_metadata(self, metadata: PageMetadata) -> Self {
        Self { metadata: Some(metadata), ..self }
    }

    #[must_use]
    pub fn head_metadata(&self) -> PageMetadata {
        self.metadata.unwrap_or(DEFAULT_METADATA)
    }
}

pub static ROUTES: &[RouteSpec] = &[
    RouteSpec::page("/brainstorming", ViewKind::BrainstormingView),
    RouteSpec::page("/campaigns", ViewKind::CampaignsView),
    RouteSpec::page("/clients", ViewKind::ClientsView),
    RouteSpec::page("/clients/{id}", ViewKind::ClientDetailView).with_param(ParamShape::ClientId),
    RouteSpec::page("/content", ViewKind::ContentLibraryView),
    RouteSpec::page("/dashboard", ViewKind::HomeView),
    RouteSpec::page("/data-sources", ViewKind::DataSourcesView),
    RouteSpec::page("/deals", ViewKind::DealsView),
    RouteSpec::page("/integrations", ViewKind::IntegrationsView),
    RouteSpec::page("/knowledge", ViewKind::KnowledgeView).with_metadata(KNOWLEDGE_METADATA),
    RouteSpec::page("/knowledge/{category}", ViewKind::KnowledgeView).with_param(ParamShape::Category),
    RouteSpec::page("/leads", ViewKind::LeadsView),
    RouteSpec::page("/metrics", ViewKind::MetricsView),
    RouteSpec::page("/pipeline", ViewKind::PipelineView),
    RouteSpec::page("/products", ViewKind::ProductsView),
    RouteSpec::page("/projects", ViewKind::ProjectsView),
    RouteSpec::page("/sales", ViewKind::SalesHubView),
    RouteSpec::page("/services", ViewKind::ServicesView),
    RouteSpec::page("/sessions", ViewKind::SessionsView),
    RouteSpec::page("/settings", ViewKind::SettingsView),
    RouteSpec::page("/strategy", ViewKind::StrategicHubView),
    RouteSpec::page("/website", ViewKind::WebsiteManagerView),
];

/// Look up a route by its registered pattern.
#[must_use]
pub fn find(pattern: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|route| route.pattern == pattern)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
