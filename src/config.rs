//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_DEMO_SESSION_MAX_AGE_DAYS: i64 = 365;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {raw:?}: expected an integer in 1..=65535")]
    InvalidPort { raw: String },
    #[error("invalid {var} {raw:?}: expected a non-negative integer")]
    InvalidNumber { var: &'static str, raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    /// Directory served under `/static`. `None` disables the mount.
    pub static_dir: Option<String>,
    pub cookie_secure: bool,
    pub demo_session_max_age_days: i64,
    /// When false, every page is served without consulting session cookies.
    pub access_gate: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_owned(),
            port: DEFAULT_PORT,
            static_dir: None,
            cookie_secure: false,
            demo_session_max_age_days: DEFAULT_DEMO_SESSION_MAX_AGE_DAYS,
            access_gate: true,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `STATIC_DIR`: unset disables `/static`
    /// - `COOKIE_SECURE`: default false
    /// - `DEMO_SESSION_MAX_AGE_DAYS`: default 365
    /// - `ACCESS_GATE`: default true
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => defaults.port,
        };
        let demo_session_max_age_days = match lookup("DEMO_SESSION_MAX_AGE_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or(ConfigError::InvalidNumber { var: "DEMO_SESSION_MAX_AGE_DAYS", raw })?,
            None => defaults.demo_session_max_age_days,
        };

        Ok(Self {
            bind_host: lookup("BIND_HOST")
                .map(|host| host.trim().to_owned())
                .filter(|host| !host.is_empty())
                .unwrap_or(defaults.bind_host),
            port,
            static_dir: lookup("STATIC_DIR").filter(|dir| !dir.trim().is_empty()),
            cookie_secure: lookup("COOKIE_SECURE")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(defaults.cookie_secure),
            demo_session_max_age_days,
            access_gate: lookup("ACCESS_GATE")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(defaults.access_gate),
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::InvalidPort { raw: raw.to_owned() })
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The error worth reporting from loading a `.env` file. A missing file is the
/// normal case and yields `None`.
#[must_use]
pub fn env_file_problem<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    result.err().filter(|e| !e.not_found())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
