//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `on_confirm` - Runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button type="button" class="delete-btn" on:click=move |_| set_asking.set(true)>
                        {label}
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| set_asking.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
