//! View components and the props handed to them.
//!
//! Views are rendered client-side; the server only names the component and
//! serializes its props into the mount point.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewKind {
    BrainstormingView,
    CampaignsView,
    ClientsView,
    ClientDetailView,
    ContentLibraryView,
    HomeView,
    DataSourcesView,
    DealsView,
    IntegrationsView,
    KnowledgeView,
    LeadsView,
    MetricsView,
    PipelineView,
    ProductsView,
    ProjectsView,
    SalesHubView,
    ServicesView,
    SessionsView,
    SettingsView,
    StrategicHubView,
    WebsiteManagerView,
}

impl ViewKind {
    /// Component name used by the client bundle to hydrate the mount point.
    #[must_use]
    pub fn component_name(self) -> &'static str {
        match self {
            Self::BrainstormingView => "BrainstormingView",
            Self::CampaignsView => "CampaignsView",
            Self::ClientsView => "ClientsView",
            Self::ClientDetailView => "ClientDetailView",
            Self::ContentLibraryView => "ContentLibraryView",
            Self::HomeView => "HomeView",
            Self::DataSourcesView => "DataSourcesView",
            Self::DealsView => "DealsView",
            Self::IntegrationsView => "IntegrationsView",
            Self::KnowledgeView => "KnowledgeView",
            Self::LeadsView => "LeadsView",
            Self::MetricsView => "MetricsView",
            Self::PipelineView => "PipelineView",
            Self::ProductsView => "ProductsView",
            Self::ProjectsView => "ProjectsView",
            Self::SalesHubView => "SalesHubView",
            Self::ServicesView => "ServicesView",
            Self::SessionsView => "SessionsView",
            Self::SettingsView => "SettingsView",
            Self::StrategicHubView => "StrategicHubView",
            Self::WebsiteManagerView => "WebsiteManagerView",
        }
    }
}

/// Props passed to a view. At most one, taken verbatim from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViewProps {
    Empty {},
    ClientId {
        #[serde(rename = "clientId")]
        client_id: String,
    },
    Category { category: String },
}

impl ViewProps {
    /// Props as the JSON object embedded in the mount point.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serializing string-only maps cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }
}
