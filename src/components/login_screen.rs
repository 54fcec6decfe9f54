//! Login Screen Component

use leptos::prelude::*;
use leptos_task_scope::TaskScope;

use crate::context::use_app;
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let app = use_app();
    let session = use_session();
    let api = StoredValue::new(app.api());
    let tasks = StoredValue::new(TaskScope::for_component());

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                let result = api.login(&user, &pass).await;
                set_loading.set(false);
                match result {
                    Ok(token) => {
                        session.sign_in(token);
                        app.navigate(Route::Dashboard);
                    }
                    Err(err) => {
                        log::warn!("[LOGIN] sign-in for {} failed: {}", user, err);
                        set_error.set(Some(err.user_message("Invalid username or password")));
                    }
                }
            })
        });
    };

    view! {
        <section class="login-screen">
            <form class="login-form" on:submit=on_submit>
                <h2>"Sign in"</h2>
                <label>
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </section>
    }
}
