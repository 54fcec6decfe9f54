//! Nav Bar Component

use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::Route;
use crate::session::use_session;

const LINKS: [Route; 5] = [
    Route::Dashboard,
    Route::Inbound,
    Route::Outbound,
    Route::Products,
    Route::Clients,
];

#[component]
pub fn NavBar() -> impl IntoView {
    let app = use_app();
    let session = use_session();

    let sign_out = move |_| {
        session.sign_out();
        app.navigate(Route::Login);
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Stockroom"</span>
            <ul class="nav-links">
                {LINKS
                    .into_iter()
                    .map(|route| {
                        view! {
                            <li>
                                <a
                                    href=route.path()
                                    class:active=move || app.route.get() == route
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        app.navigate(route);
                                    }
                                >
                                    {route.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show
                when=move || session.is_authenticated()
                fallback=move || {
                    view! {
                        <button type="button" class="nav-auth" on:click=move |_| app.navigate(Route::Login)>
                            "Sign in"
                        </button>
                    }
                }
            >
                <button type="button" class="nav-auth" on:click=sign_out>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
