//! Movement Screen Component
//!
//! Inbound/outbound voucher form: loads reference data on entry, edits a
//! list of line items and submits the whole document at once.

use leptos::prelude::*;
use leptos_task_scope::TaskScope;

use super::{Banner, FieldMessage, LineItemRow, StockLookup};
use crate::context::use_app;
use crate::models::{ClientRef, MovementKind};
use crate::movement::{self, BannerKind, FieldKey, MovementForm, Phase};

/// Client picker bound to the draft's client reference
#[component]
fn ClientSelect(form: RwSignal<MovementForm>) -> impl IntoView {
    let clients = Memo::new(move |_| form.with(|f| f.reference().clients.clone()));
    let selected = move || {
        form.with(|f| match &f.draft().client {
            Some(ClientRef::Id(id)) => id.to_string(),
            _ => String::new(),
        })
    };
    let on_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let client = clients.with_untracked(|list| {
            list.iter()
                .find(|c| c.id.to_string() == raw)
                .map(|c| ClientRef::Id(c.id.clone()))
        });
        form.update(|f| f.set_client(client));
    };
    let error = Signal::derive(move || form.with(|f| f.visible_error(FieldKey::Client)).map(|e| e.to_string()));

    view! {
        <label class="client-field">
            <span>"Client"</span>
            <select
                prop:value=selected
                on:change=on_change
                on:blur=move |_| form.update(|f| f.touch(FieldKey::Client))
            >
                <option value="">"Select client"</option>
                {move || {
                    clients
                        .get()
                        .into_iter()
                        .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                        .collect_view()
                }}
            </select>
            <FieldMessage message=error />
        </label>
    }
}

#[component]
pub fn MovementScreen(kind: MovementKind) -> impl IntoView {
    let app = use_app();
    let api = StoredValue::new(app.api());
    let tasks = StoredValue::new(TaskScope::for_component());
    let form = RwSignal::new(MovementForm::new(kind));

    let reload = move || {
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                movement::load_reference_data(&api, &form).await;
            })
        });
    };
    // Subscribe on enter; the task scope cancels on exit
    reload();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                movement::submit(&api, &form).await;
            })
        });
    };

    let phase = Memo::new(move |_| form.with(MovementForm::phase));
    let line_count = Memo::new(move |_| form.with(|f| f.draft().lines().len()));
    let success = Signal::derive(move || form.with(|f| f.banner(BannerKind::Success).map(str::to_string)));
    let error = Signal::derive(move || form.with(|f| f.banner(BannerKind::Error).map(str::to_string)));
    let reference = Signal::derive(move || form.with(|f| f.reference().clone()));

    view! {
        <section class="movement-screen">
            <h2>{format!("New {} voucher", kind.label().to_lowercase())}</h2>

            <Banner
                message=success
                class="banner-success"
                on_dismiss=move |_: ()| form.update(|f| f.dismiss(BannerKind::Success))
            />
            <Banner
                message=error
                class="banner-error"
                on_dismiss=move |_: ()| form.update(|f| f.dismiss(BannerKind::Error))
            />

            <Show when=move || phase.get() == Phase::Loading>
                <p class="loading">"Loading products, sections and clients..."</p>
            </Show>
            <Show when=move || phase.get() == Phase::LoadFailed>
                <button type="button" class="retry-btn" on:click=move |_| reload()>
                    "Reload"
                </button>
            </Show>

            <form class="movement-form" on:submit=on_submit>
                <fieldset disabled=move || phase.get() != Phase::Ready>
                    <ClientSelect form=form />

                    <table class="line-items">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Product"</th>
                                <th>"Section"</th>
                                <th>"Cartons"</th>
                                <th>"Pallets"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                (0..line_count.get())
                                    .map(|index| view! { <LineItemRow form=form index=index /> })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="add-line-btn"
                            on:click=move |_| form.update(MovementForm::add_line)
                        >
                            "+ Add line"
                        </button>
                        <button type="submit" class="submit-btn">
                            {move || if phase.get() == Phase::Submitting { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </fieldset>
            </form>

            {(kind == MovementKind::Outbound).then(|| view! { <StockLookup reference=reference /> })}
        </section>
    }
}
