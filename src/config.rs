//! App Configuration
//!
//! Values are baked in at build time from `STOCKROOM_*` environment
//! variables; anything unset falls back to the defaults below.

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "https://localhost:7006/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash
    pub api_base_url: String,
    /// Route guard enforcement (off until production)
    pub enforce_guards: bool,
    pub log_level: LevelFilter,
    /// Roles allowed on the catalog screens when guards are enforced; empty means any signed-in user
    pub catalog_roles: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("STOCKROOM_API_URL"),
            option_env!("STOCKROOM_ENFORCE_GUARDS"),
            option_env!("STOCKROOM_LOG_LEVEL"),
        )
        .with_catalog_roles(option_env!("STOCKROOM_CATALOG_ROLES"))
    }

    pub fn from_values(api_url: Option<&str>, enforce_guards: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_url.unwrap_or(DEFAULT_API_URL)),
            enforce_guards: enforce_guards.map(parse_flag).unwrap_or(false),
            log_level: log_level
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(LevelFilter::Info),
            catalog_roles: Vec::new(),
        }
    }

    /// Comma-separated role list, e.g. `Admin,Manager`
    pub fn with_catalog_roles(mut self, raw: Option<&str>) -> Self {
        self.catalog_roles = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string)
            .collect();
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(!config.enforce_guards);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_base_url_normalized() {
        let config = AppConfig::from_values(Some(" https://wms.example.com/api/ "), None, None);
        assert_eq!(config.api_base_url, "https://wms.example.com/api");

        let config = AppConfig::from_values(Some("   "), None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_flags_and_level() {
        let config = AppConfig::from_values(None, Some("TRUE"), Some("debug"));
        assert!(config.enforce_guards);
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = AppConfig::from_values(None, Some("nope"), Some("loud"));
        assert!(!config.enforce_guards);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_catalog_roles_list() {
        let config = AppConfig::default().with_catalog_roles(Some(" Admin, ,Manager "));
        assert_eq!(config.catalog_roles, vec!["Admin".to_string(), "Manager".to_string()]);
        assert!(AppConfig::default().with_catalog_roles(None).catalog_roles.is_empty());
    }
}
