//! Stock Lookup Component
//!
//! Checks quantity on hand for a client/product/section triple before
//! issuing stock.

use leptos::prelude::*;
use leptos_task_scope::TaskScope;

use crate::context::use_app;
use crate::models::{EntityId, NamedRef, StockLevel, StockQuery};
use crate::movement::ReferenceData;

fn find_id(entries: &[NamedRef], raw: &str) -> Option<EntityId> {
    entries.iter().find(|e| e.id.to_string() == raw).map(|e| e.id.clone())
}

/// Build the query from selected option values; `None` until all three are chosen
fn build_query(reference: &ReferenceData, client: &str, product: &str, section: &str) -> Option<StockQuery> {
    Some(StockQuery {
        client_id: find_id(&reference.clients, client)?,
        product_id: find_id(&reference.products, product)?,
        section_id: find_id(&reference.sections, section)?,
    })
}

fn id_options(entries: Vec<NamedRef>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| view! { <option value=entry.id.to_string()>{entry.name}</option> })
        .collect_view()
}

#[component]
pub fn StockLookup(#[prop(into)] reference: Signal<ReferenceData>) -> impl IntoView {
    let app = use_app();
    let api = StoredValue::new(app.api());
    let tasks = StoredValue::new(TaskScope::for_component());

    let (client, set_client) = signal(String::new());
    let (product, set_product) = signal(String::new());
    let (section, set_section) = signal(String::new());
    let (checking, set_checking) = signal(false);
    let (result, set_result) = signal::<Option<Result<StockLevel, String>>>(None);

    let check = move |_| {
        let query = reference.with_untracked(|r| {
            build_query(r, &client.get_untracked(), &product.get_untracked(), &section.get_untracked())
        });
        let Some(query) = query else {
            set_result.set(Some(Err("Select a client, product and section".to_string())));
            return;
        };
        set_checking.set(true);
        let api = api.get_value();
        tasks.with_value(|t| {
            t.spawn(async move {
                let outcome = api
                    .get_stock(&query)
                    .await
                    .map_err(|e| e.user_message("Failed to load stock"));
                set_checking.set(false);
                set_result.set(Some(outcome));
            })
        });
    };

    view! {
        <section class="stock-lookup">
            <h3>"Stock on hand"</h3>
            <div class="stock-lookup-row">
                <select prop:value=move || client.get() on:change=move |ev| set_client.set(event_target_value(&ev))>
                    <option value="">"Client"</option>
                    {move || id_options(reference.with(|r| r.clients.clone()))}
                </select>
                <select prop:value=move || product.get() on:change=move |ev| set_product.set(event_target_value(&ev))>
                    <option value="">"Product"</option>
                    {move || id_options(reference.with(|r| r.products.clone()))}
                </select>
                <select prop:value=move || section.get() on:change=move |ev| set_section.set(event_target_value(&ev))>
                    <option value="">"Section"</option>
                    {move || id_options(reference.with(|r| r.sections.clone()))}
                </select>
                <button type="button" disabled=move || checking.get() on:click=check>
                    {move || if checking.get() { "Checking..." } else { "Check stock" }}
                </button>
            </div>
            {move || {
                result
                    .get()
                    .map(|outcome| match outcome {
                        Ok(level) => {
                            view! {
                                <p class="stock-result">{format!("Quantity on hand: {}", level.quantity)}</p>
                            }
                                .into_any()
                        }
                        Err(message) => view! { <p class="field-error">{message}</p> }.into_any(),
                    })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData {
            products: vec![NamedRef { id: EntityId::Number(3), name: "Apples".into() }],
            sections: vec![NamedRef { id: EntityId::from("A1"), name: "Chamber A1".into() }],
            clients: vec![NamedRef { id: EntityId::Number(7), name: "Cold Foods Ltd".into() }],
        }
    }

    #[test]
    fn test_build_query_from_selected_ids() {
        let query = build_query(&reference(), "7", "3", "A1").unwrap();
        assert_eq!(query.client_id, EntityId::Number(7));
        assert_eq!(query.product_id, EntityId::Number(3));
        assert_eq!(query.section_id, EntityId::from("A1"));
    }

    #[test]
    fn test_build_query_needs_every_selection() {
        assert!(build_query(&reference(), "", "3", "A1").is_none());
        assert!(build_query(&reference(), "7", "99", "A1").is_none());
    }
}
