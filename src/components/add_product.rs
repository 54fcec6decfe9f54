//! Add Product Component
//!
//! Stand-alone product form; returns to the product list when saved.

use leptos::prelude::*;
use leptos_task_scope::TaskScope;

use crate::api::Catalog;
use crate::context::use_app;
use crate::models::NewNamed;
use crate::routes::Route;
use crate::store::{store_add_entry, use_app_store};

#[component]
pub fn AddProduct() -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let api = StoredValue::new(app.api());
    let tasks = StoredValue::new(TaskScope::for_component());

    let (name, set_name) = signal(String::new());
    let (submitted, set_submitted) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let name_missing = move || name.with(|n| n.trim().is_empty());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);
        if name_missing() {
            return;
        }
        let value = name.get_untracked().trim().to_string();
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                match api.catalog(Catalog::Products).create(&NewNamed { name: &value }).await {
                    Ok(product) => {
                        store_add_entry(&store, Catalog::Products, product);
                        app.navigate(Route::Products);
                    }
                    Err(err) => {
                        log::warn!("[PRODUCT] create failed: {}", err);
                        set_error.set(Some("Failed to create product".to_string()));
                        set_loading.set(false);
                    }
                }
            })
        });
    };

    view! {
        <section class="add-product">
            <h2>"Add product"</h2>
            <form on:submit=on_submit>
                <label>
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || submitted.get() && name_missing()>
                    <span class="field-error">"Name is required"</span>
                </Show>
                {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                <div class="form-actions">
                    <button type="button" on:click=move |_| app.navigate(Route::Products)>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
