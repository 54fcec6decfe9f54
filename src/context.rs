//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::routes::Route;
use crate::session::use_session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen currently shown - read
    pub route: ReadSignal<Route>,
    /// Screen currently shown - write
    set_route: WriteSignal<Route>,
    /// Build-time configuration
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), config: AppConfig) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
        }
    }

    /// Show `route` and record it in browser history
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        log::debug!("[NAV] -> {}", route.path());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
        }
        self.set_route.set(route);
    }

    /// Show `route` in place of the current history entry (redirects)
    pub fn redirect(&self, route: Route) {
        log::debug!("[NAV] redirect -> {}", route.path());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
        }
        self.set_route.set(route);
    }

    /// Re-read the browser location (start-up and back/forward buttons)
    pub fn sync_with_location(&self) {
        let path = current_path();
        let route = Route::resolve(&path);
        if route.path() != path.trim_end_matches('/') {
            self.redirect(route);
        } else {
            self.set_route.set(route);
        }
    }

    /// API client carrying the current session token
    pub fn api(&self) -> ApiClient {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(base_url, use_session().token())
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
