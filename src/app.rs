//! Stockroom App
//!
//! Root component: provides the shared contexts and switches screens on
//! the current route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::Catalog;
use crate::components::{AddProduct, CatalogScreen, Dashboard, LoginScreen, MovementScreen, NavBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::guard::{Access, RouteGuard};
use crate::models::MovementKind;
use crate::routes::Route;
use crate::session::SessionContext;
use crate::store::AppState;

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let guard = StoredValue::new(RouteGuard::from_config(&config));

    let session = SessionContext::restore();
    provide_context(session);

    let app = AppContext::new(signal(Route::Login), config);
    provide_context(app);
    provide_context(Store::new(AppState::default()));

    app.sync_with_location();
    let popstate = window_event_listener(ev::popstate, move |_| app.sync_with_location());
    on_cleanup(move || popstate.remove());

    // Re-checked whenever the route or the session changes
    Effect::new(move |_| {
        let route = app.route.get();
        let access = session
            .session
            .with(|s| guard.with_value(|g| g.check(route, s.as_ref(), now_secs())));
        if let Access::Redirect(target) = access {
            if target != route {
                log::info!("[GUARD] {} -> {}", route.path(), target.path());
                app.redirect(target);
            }
        }
    });

    view! {
        <div class="app-layout">
            <Show when=move || app.route.get() != Route::Login>
                <NavBar />
            </Show>
            <main class="app-main">
                {move || match app.route.get() {
                    Route::Login => view! { <LoginScreen /> }.into_any(),
                    Route::Dashboard | Route::Home => view! { <Dashboard /> }.into_any(),
                    Route::Inbound => view! { <MovementScreen kind=MovementKind::Inbound /> }.into_any(),
                    Route::Outbound => view! { <MovementScreen kind=MovementKind::Outbound /> }.into_any(),
                    Route::Products => view! { <CatalogScreen catalog=Catalog::Products /> }.into_any(),
                    Route::AddProduct => view! { <AddProduct /> }.into_any(),
                    Route::Sections => view! { <CatalogScreen catalog=Catalog::Sections /> }.into_any(),
                    Route::Clients => view! { <CatalogScreen catalog=Catalog::Clients /> }.into_any(),
                }}
            </main>
        </div>
    }
}
