//! Route Table
//!
//! Maps URL paths to screens. Anything unknown lands on the login screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Home,
    Inbound,
    Outbound,
    Products,
    AddProduct,
    Sections,
    Clients,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::Dashboard,
        Route::Home,
        Route::Inbound,
        Route::Outbound,
        Route::Products,
        Route::AddProduct,
        Route::Sections,
        Route::Clients,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Home => "/home",
            Route::Inbound => "/inbound",
            Route::Outbound => "/outbound",
            Route::Products => "/products",
            Route::AddProduct => "/products/add",
            Route::Sections => "/sections",
            Route::Clients => "/clients",
        }
    }

    /// Resolve a location path (query and fragment are ignored)
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::Login)
    }

    pub fn is_public(self) -> bool {
        self == Route::Login
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard | Route::Home => "Dashboard",
            Route::Inbound => "Inbound",
            Route::Outbound => "Outbound",
            Route::Products => "Products",
            Route::AddProduct => "Add product",
            Route::Sections => "Sections",
            Route::Clients => "Clients",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_empty_paths_redirect_to_login() {
        assert_eq!(Route::resolve(""), Route::Login);
        assert_eq!(Route::resolve("/"), Route::Login);
        assert_eq!(Route::resolve("/sand-tahweel"), Route::Login);
        assert_eq!(Route::resolve("/products/edit"), Route::Login);
    }

    #[test]
    fn test_trailing_slash_and_query_ignored() {
        assert_eq!(Route::resolve("/inbound/"), Route::Inbound);
        assert_eq!(Route::resolve("/products/add?from=list"), Route::AddProduct);
        assert_eq!(Route::resolve("/outbound#stock"), Route::Outbound);
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(Route::Login.is_public());
        assert!(!Route::Inbound.is_public());
    }
}
