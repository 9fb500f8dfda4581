//! Navigation Bar Component
//!
//! Top links, current user and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::routes::AppRoute;
use crate::store::AppStateStoreFields;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let navigate = use_navigate();

    view! {
        <nav class="nav-bar">
            <A href=AppRoute::Home.path()>
                <span class="nav-brand">"Taskboard"</span>
            </A>
            {move || {
                if store.is_logged_in().get() {
                    let navigate = navigate.clone();
                    let email = store.user().get().map(|u| u.email).unwrap_or_default();
                    view! {
                        <A href=AppRoute::Tasks.path()>"Tasks"</A>
                        <span class="nav-user">{email}</span>
                        <button
                            type="button"
                            class="logout-btn"
                            on:click=move |_| {
                                ctx.logout();
                                navigate(AppRoute::Login.path(), Default::default());
                            }
                        >
                            "Log out"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <A href=AppRoute::Login.path()>"Log in"</A>
                        <A href=AppRoute::Signup.path()>"Sign up"</A>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
