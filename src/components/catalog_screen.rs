//! Catalog Screen Component
//!
//! List of products, sections or clients with add, rename and delete.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_task_scope::TaskScope;

use super::{Banner, DeleteConfirmButton};
use crate::api::{ApiClient, Catalog};
use crate::context::use_app;
use crate::models::{NamedRef, NewNamed};
use crate::store::{
    store_catalog, store_remove_entry, store_set_catalog, store_update_entry, use_app_store,
};

/// Modal stays open this long after a successful add
const CLOSE_DELAY_MS: u32 = 1500;

/// Add dialog
#[component]
fn AddEntryModal(
    catalog: Catalog,
    api: StoredValue<ApiClient>,
    #[prop(into)] on_close: Callback<bool>,
) -> impl IntoView {
    let tasks = StoredValue::new(TaskScope::for_component());
    let (name, set_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (form_success, set_form_success) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            set_form_error.set(Some("Name is required".to_string()));
            return;
        }
        set_submitting.set(true);
        set_form_error.set(None);
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                match api.catalog(catalog).create(&NewNamed { name: &value }).await {
                    Ok(created) => {
                        log::info!("[CATALOG] added {} {}", catalog.singular(), created.id);
                        set_submitting.set(false);
                        set_form_success.set(true);
                        TimeoutFuture::new(CLOSE_DELAY_MS).await;
                        on_close.run(true);
                    }
                    Err(err) => {
                        log::warn!("[CATALOG] add {} failed: {}", catalog.singular(), err);
                        set_submitting.set(false);
                        set_form_error.set(Some(format!("Failed to add {}", catalog.singular())));
                    }
                }
            })
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=on_submit>
                <h3>{format!("Add {}", catalog.singular())}</h3>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                {move || form_error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                <Show when=move || form_success.get()>
                    <p class="form-success">{format!("The {} was added", catalog.singular())}</p>
                </Show>
                <div class="modal-actions">
                    <button type="button" on:click=move |_| on_close.run(false)>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || submitting.get() || form_success.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One catalog row with inline rename
#[component]
fn CatalogRow(
    catalog: Catalog,
    entry: NamedRef,
    api: StoredValue<ApiClient>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let store = use_app_store();
    let tasks = StoredValue::new(TaskScope::for_component());
    let (editing, set_editing) = signal(false);
    let (draft_name, set_draft_name) = signal(entry.name.clone());
    let entry = StoredValue::new(entry);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = draft_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let id = entry.with_value(|e| e.id.clone());
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                let resource = api.catalog(catalog);
                let result = match resource.update(&id, &NewNamed { name: &name }).await {
                    Ok(()) => resource.get(&id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(updated) => {
                        store_update_entry(&store, catalog, updated);
                        set_editing.set(false);
                    }
                    Err(err) => {
                        log::warn!("[CATALOG] rename {} {} failed: {}", catalog.singular(), id, err);
                        set_error.set(Some(format!("Failed to update {}", catalog.singular())));
                    }
                }
            })
        });
    };

    let delete = move |_: ()| {
        let id = entry.with_value(|e| e.id.clone());
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                match api.catalog(catalog).delete(&id).await {
                    Ok(()) => store_remove_entry(&store, catalog, &id),
                    Err(err) => {
                        log::warn!("[CATALOG] delete {} {} failed: {}", catalog.singular(), id, err);
                        set_error.set(Some(format!("Failed to delete {}", catalog.singular())));
                    }
                }
            })
        });
    };

    view! {
        <li class="catalog-row">
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <span
                            class="catalog-name"
                            on:dblclick=move |_| set_editing.set(true)
                        >
                            {entry.with_value(|e| e.name.clone())}
                        </span>
                        <button type="button" class="edit-btn" on:click=move |_| set_editing.set(true)>
                            "Edit"
                        </button>
                        <DeleteConfirmButton
                            name=entry.with_value(|e| e.name.clone())
                            on_confirm=delete
                        />
                    }
                }
            >
                <form class="catalog-rename" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || draft_name.get()
                        on:input=move |ev| set_draft_name.set(event_target_value(&ev))
                    />
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </form>
            </Show>
        </li>
    }
}

#[component]
pub fn CatalogScreen(catalog: Catalog) -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let api = StoredValue::new(app.api());
    let tasks = StoredValue::new(TaskScope::for_component());

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                match api.catalog(catalog).list().await {
                    Ok(entries) => store_set_catalog(&store, catalog, entries),
                    Err(err) => {
                        log::warn!("[CATALOG] loading {} failed: {}", catalog.title(), err);
                        set_error.set(Some(format!("Failed to load {}", catalog.title().to_lowercase())));
                    }
                }
                set_loading.set(false);
            })
        });
    };
    load();

    let on_modal_close = move |added: bool| {
        set_show_modal.set(false);
        if added {
            load();
        }
    };

    view! {
        <section class="catalog-screen">
            <div class="catalog-header">
                <h2>{catalog.title()}</h2>
                <button type="button" class="add-btn" on:click=move |_| set_show_modal.set(true)>
                    {format!("+ Add {}", catalog.singular())}
                </button>
            </div>

            <Banner
                message=error
                class="banner-error"
                on_dismiss=move |_: ()| set_error.set(None)
            />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="catalog-list">
                    {move || {
                        let entries = store_catalog(&store, catalog);
                        if entries.is_empty() {
                            view! { <li class="catalog-empty">"Nothing here yet"</li> }.into_any()
                        } else {
                            entries
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <CatalogRow
                                            catalog=catalog
                                            entry=entry
                                            api=api
                                            set_error=set_error
                                        />
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </Show>

            <Show when=move || show_modal.get()>
                <AddEntryModal catalog=catalog api=api on_close=on_modal_close />
            </Show>
        </section>
    }
}
