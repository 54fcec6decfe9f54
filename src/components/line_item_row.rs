//! Line Item Row Component
//!
//! One product/section/quantity row of a movement form.

use leptos::prelude::*;

use super::FieldMessage;
use crate::models::NamedRef;
use crate::movement::{LineField, MovementForm};

fn cell_value(form: &MovementForm, index: usize, field: LineField) -> String {
    let Some(line) = form.draft().lines().get(index) else {
        return String::new();
    };
    match field {
        LineField::Product => line.product_name.clone(),
        LineField::Section => line.section_name.clone(),
        LineField::Cartons => line.cartons.map(|n| n.to_string()).unwrap_or_default(),
        LineField::Pallets => line.pallets.map(|n| n.to_string()).unwrap_or_default(),
    }
}

/// `<option>` list keyed by name; line items reference products and sections by name
fn name_options(entries: Vec<NamedRef>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| {
            let name = entry.name;
            let value = name.clone();
            view! { <option value=value>{name}</option> }
        })
        .collect_view()
}

#[component]
pub fn LineItemRow(form: RwSignal<MovementForm>, index: usize) -> impl IntoView {
    let products = Memo::new(move |_| form.with(|f| f.reference().products.clone()));
    let sections = Memo::new(move |_| form.with(|f| f.reference().sections.clone()));
    let can_remove = Memo::new(move |_| form.with(|f| f.draft().lines().len() > 1));

    let value = move |field: LineField| form.with(|f| cell_value(f, index, field));
    let edit = move |field: LineField, raw: String| form.update(|f| f.edit_line(index, field, &raw));
    let touch = move |field: LineField| form.update(|f| f.touch(field.key(index)));
    let error = move |field: LineField| {
        Signal::derive(move || form.with(|f| f.visible_error(field.key(index))).map(|e| e.to_string()))
    };

    view! {
        <tr class="line-item-row">
            <td class="line-number">{index + 1}</td>
            <td>
                <select
                    prop:value=move || value(LineField::Product)
                    on:change=move |ev| edit(LineField::Product, event_target_value(&ev))
                    on:blur=move |_| touch(LineField::Product)
                >
                    <option value="">"Select product"</option>
                    {move || name_options(products.get())}
                </select>
                <FieldMessage message=error(LineField::Product) />
            </td>
            <td>
                <select
                    prop:value=move || value(LineField::Section)
                    on:change=move |ev| edit(LineField::Section, event_target_value(&ev))
                    on:blur=move |_| touch(LineField::Section)
                >
                    <option value="">"Select section"</option>
                    {move || name_options(sections.get())}
                </select>
                <FieldMessage message=error(LineField::Section) />
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    step="1"
                    prop:value=move || value(LineField::Cartons)
                    on:input=move |ev| edit(LineField::Cartons, event_target_value(&ev))
                    on:blur=move |_| touch(LineField::Cartons)
                />
                <FieldMessage message=error(LineField::Cartons) />
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    step="1"
                    prop:value=move || value(LineField::Pallets)
                    on:input=move |ev| edit(LineField::Pallets, event_target_value(&ev))
                    on:blur=move |_| touch(LineField::Pallets)
                />
                <FieldMessage message=error(LineField::Pallets) />
            </td>
            <td>
                <button
                    type="button"
                    class="remove-line-btn"
                    title="Remove line"
                    disabled=move || !can_remove.get()
                    on:click=move |_| {
                        form.update(|f| {
                            f.remove_line(index);
                        });
                    }
                >
                    "×"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, MovementKind};

    #[test]
    fn test_cell_value_renders_missing_quantity_as_empty() {
        let mut form = MovementForm::new(MovementKind::Inbound);
        assert_eq!(cell_value(&form, 0, LineField::Cartons), "0");
        form.edit_line(0, LineField::Cartons, "");
        assert_eq!(cell_value(&form, 0, LineField::Cartons), "");
        form.edit_line(0, LineField::Product, "Apples");
        assert_eq!(cell_value(&form, 0, LineField::Product), "Apples");
        assert_eq!(cell_value(&form, 9, LineField::Product), "");
    }

    #[test]
    fn test_name_options_take_owned_entries() {
        let entries = vec![
            NamedRef { id: EntityId::Number(1), name: "Apples".into() },
            NamedRef { id: EntityId::from("S1"), name: "Chamber S1".into() },
        ];
        let _options = name_options(entries);
    }
}
