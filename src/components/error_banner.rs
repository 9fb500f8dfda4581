//! Error Banner Component
//!
//! Shows the last failed task operation until dismissed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    move || {
        store.error().get().map(|msg| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{msg}</span>
                    <button type="button" class="dismiss-btn" on:click=move |_| ctx.clear_error()>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
