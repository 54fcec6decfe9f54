//! Route Guard
//!
//! Disabled by default: every route is reachable without signing in.
//! When enforcement is switched on, protected routes need a session whose
//! token has not expired and, for routes with role rules, a matching role.

use crate::config::AppConfig;
use crate::routes::Route;
use crate::session::Session;

/// Screens that edit the shared product, section and client lists
const CATALOG_ROUTES: [Route; 4] = [Route::Products, Route::AddProduct, Route::Sections, Route::Clients];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGuard {
    enforce: bool,
    role_rules: Vec<(Route, Vec<String>)>,
}

impl RouteGuard {
    pub fn new(enforce: bool) -> Self {
        Self {
            enforce,
            role_rules: Vec::new(),
        }
    }

    /// Guard for the running app: enforcement switch plus catalog role rules
    pub fn from_config(config: &AppConfig) -> Self {
        let roles: Vec<&str> = config.catalog_roles.iter().map(String::as_str).collect();
        let guard = Self::new(config.enforce_guards);
        if roles.is_empty() {
            return guard;
        }
        CATALOG_ROUTES
            .into_iter()
            .fold(guard, |guard, route| guard.require_roles(route, &roles))
    }

    /// Only users holding one of `roles` may open `route`
    pub fn require_roles(mut self, route: Route, roles: &[&str]) -> Self {
        self.role_rules
            .push((route, roles.iter().map(|r| r.to_string()).collect()));
        self
    }

    fn required_roles(&self, route: Route) -> &[String] {
        self.role_rules
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, roles)| roles.as_slice())
            .unwrap_or(&[])
    }

    pub fn check(&self, route: Route, session: Option<&Session>, now_secs: i64) -> Access {
        if !self.enforce || route.is_public() {
            return Access::Allow;
        }
        let Some(session) = session else {
            return Access::Redirect(Route::Login);
        };
        let claims = session.claims().unwrap_or_default();
        if claims.is_expired(now_secs) {
            log::info!("[GUARD] token expired, redirecting to login");
            return Access::Redirect(Route::Login);
        }
        let required = self.required_roles(route);
        if required.is_empty() {
            return Access::Allow;
        }
        match claims.role {
            Some(role) if required.iter().any(|r| *r == role) => Access::Allow,
            _ => Access::Redirect(Route::Login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn session_with(payload: &str) -> Session {
        Session::new(format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload)))
    }

    #[test]
    fn test_disabled_guard_allows_everything() {
        let guard = RouteGuard::new(false).require_roles(Route::Products, &["Admin"]);
        for route in Route::ALL {
            assert_eq!(guard.check(route, None, 0), Access::Allow);
        }
    }

    #[test]
    fn test_enforced_guard_requires_session() {
        let guard = RouteGuard::new(true);
        assert_eq!(guard.check(Route::Login, None, 0), Access::Allow);
        assert_eq!(guard.check(Route::Inbound, None, 0), Access::Redirect(Route::Login));
        assert_eq!(
            guard.check(Route::Inbound, Some(&Session::new("opaque")), 0),
            Access::Allow
        );
    }

    #[test]
    fn test_expired_token_redirects() {
        let guard = RouteGuard::new(true);
        let session = session_with(r#"{"exp": 100}"#);
        assert_eq!(guard.check(Route::Dashboard, Some(&session), 99), Access::Allow);
        assert_eq!(
            guard.check(Route::Dashboard, Some(&session), 100),
            Access::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_role_rules() {
        let guard = RouteGuard::new(true).require_roles(Route::AddProduct, &["Admin", "Manager"]);
        let admin = session_with(r#"{"role": "Admin"}"#);
        let clerk = session_with(r#"{"role": "Clerk"}"#);

        assert_eq!(guard.check(Route::AddProduct, Some(&admin), 0), Access::Allow);
        assert_eq!(
            guard.check(Route::AddProduct, Some(&clerk), 0),
            Access::Redirect(Route::Login)
        );
        assert_eq!(guard.check(Route::Products, Some(&clerk), 0), Access::Allow);
    }

    #[test]
    fn test_catalog_roles_from_config() {
        let config = AppConfig::from_values(None, Some("true"), None).with_catalog_roles(Some("Admin"));
        let guard = RouteGuard::from_config(&config);
        let admin = session_with(r#"{"role": "Admin"}"#);
        let clerk = session_with(r#"{"role": "Clerk"}"#);

        for route in CATALOG_ROUTES {
            assert_eq!(guard.check(route, Some(&admin), 0), Access::Allow);
            assert_eq!(guard.check(route, Some(&clerk), 0), Access::Redirect(Route::Login));
        }
        assert_eq!(guard.check(Route::Inbound, Some(&clerk), 0), Access::Allow);

        let open = RouteGuard::from_config(&AppConfig::default().with_catalog_roles(Some("Admin")));
        assert_eq!(open.check(Route::AddProduct, None, 0), Access::Allow);
    }
}
