//! Delete Confirm Button Component

use leptos::prelude::*;

/// Two-step delete: the first click asks "Delete <name>?", the second runs `on_confirm`.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let prompt = format!("Delete {}?", name);

    move || {
        if !asking.get() {
            return view! {
                <button
                    type="button"
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| asking.set(true)
                >
                    "×"
                </button>
            }
            .into_any();
        }
        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| asking.set(false)>
                    "No"
                </button>
            </span>
        }
        .into_any()
    }
}
