//! Role-based access control for page routes.
//!
//! DESIGN
//! ======
//! Sessions are derived purely from request cookies: `role`, `caps`,
//! `demo_session` and `auth_token`. A request with none of them is treated as
//! a first visit and gets a demo session; an identified session must hold the
//! capability its route requires.

use std::fmt;
use std::str::FromStr;

use axum_extra::extract::cookie::CookieJar;

pub const ROLE_COOKIE: &str = "role";
pub const CAPS_COOKIE: &str = "caps";
pub const DEMO_SESSION_COOKIE: &str = "demo_session";
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

// =============================================================================
// ROLES & CAPABILITIES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    OrgAdmin,
    BillingAdmin,
    OpsManager,
    Member,
    Viewer,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::OrgAdmin => "org_admin",
            Self::BillingAdmin => "billing_admin",
            Self::OpsManager => "ops_manager",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }

    /// Capabilities granted when the session carries no explicit `caps` list.
    #[must_use]
    pub fn default_capabilities(self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Self::SuperAdmin | Self::OrgAdmin => &[
                ViewOverview,
                ViewTasks,
                ViewAiInsights,
                ViewNormalize,
                ViewOsPages,
                CalendarRead,
                MemoryRead,
            ],
            Self::BillingAdmin => &[ViewOverview, ViewOsPages],
            Self::OpsManager => &[ViewOverview, ViewTasks, ViewOsPages],
            Self::Member => &[ViewOverview, ViewTasks, ViewAiInsights],
            Self::Viewer => &[ViewOverview],
        }
    }
}

impl FromStr for Role {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "org_admin" => Ok(Self::OrgAdmin),
            "billing_admin" => Ok(Self::BillingAdmin),
            "ops_manager" => Ok(Self::OpsManager),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            other => Err(UnknownName(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewOverview,
    ViewTasks,
    ViewAiInsights,
    ViewNormalize,
    ViewOsPages,
    CalendarRead,
    MemoryRead,
}

impl Capability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewOverview => "view.overview",
            Self::ViewTasks => "view.tasks",
            Self::ViewAiInsights => "view.ai_insights",
            Self::ViewNormalize => "view.normalize",
            Self::ViewOsPages => "view.os_pages",
            Self::CalendarRead => "integrations.calendar.read",
            Self::MemoryRead => "integrations.memory.read",
        }
    }
}

impl FromStr for Capability {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view.overview" => Ok(Self::ViewOverview),
            "view.tasks" => Ok(Self::ViewTasks),
            "view.ai_insights" => Ok(Self::ViewAiInsights),
            "view.normalize" => Ok(Self::ViewNormalize),
            "view.os_pages" => Ok(Self::ViewOsPages),
            "integrations.calendar.read" => Ok(Self::CalendarRead),
            "integrations.memory.read" => Ok(Self::MemoryRead),
            other => Err(UnknownName(other.to_owned())),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name: {0}")]
pub struct UnknownName(pub String);

// =============================================================================
// SESSION
// =============================================================================

/// Identity and permissions carried by request cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub capabilities: Vec<Capability>,
    pub demo: bool,
}

impl Session {
    /// Extract a session from cookies. `None` means the visitor is anonymous.
    ///
    /// Unknown roles fall back to viewer permissions. An explicit `caps` list
    /// replaces the role defaults even if none of its names are recognized.
    #[must_use]
    pub fn from_cookies(jar: &CookieJar) -> Option<Self> {
        let value = |name: &str| jar.get(name).map(|c| c.value().to_owned()).unwrap_or_default();

        let role_raw = value(ROLE_COOKIE);
        let demo = value(DEMO_SESSION_COOKIE) == "true";
        let has_auth_token = !value(AUTH_TOKEN_COOKIE).is_empty();

        if !(demo || has_auth_token || !role_raw.is_empty()) {
            return None;
        }

        let role = role_raw.parse::<Role>().unwrap_or(Role::Viewer);
        let caps_raw = value(CAPS_COOKIE);
        let names: Vec<&str> = caps_raw.split(',').filter(|name| !name.is_empty()).collect();
        let capabilities = if names.is_empty() {
            role.default_capabilities().to_vec()
        } else {
            names.into_iter().filter_map(|name| name.parse().ok()).collect()
        };

        Some(Self { role, capabilities, demo })
    }

    #[must_use]
    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

#[cfg(test)]
#[path = "access_test.rs"]
mod tests;
