//! Banner Component
//!
//! Dismissible success/error message shown above a form.

use leptos::prelude::*;

#[component]
pub fn Banner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] class: String,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let class = format!("banner {}", class);
    move || {
        message.get().map(|text| {
            view! {
                <div class=class.clone() role="alert">
                    <span class="banner-text">{text}</span>
                    <button
                        type="button"
                        class="banner-close"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

/// Inline validation message under an input
#[component]
pub fn FieldMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <span class="field-error">{text}</span> })
}
