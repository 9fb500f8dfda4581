//! Home View

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::routes::{enter_page, AppRoute};
use crate::store::AppStateStoreFields;

#[component]
pub fn HomeView() -> impl IntoView {
    enter_page(AppRoute::Home);
    let store = use_app_context().store;

    view! {
        <section class="home-view">
            <h1>"Taskboard"</h1>
            {move || match store.user().get().filter(|_| store.is_logged_in().get()) {
                Some(user) => view! {
                    <p>"Signed in as " <strong>{user.email}</strong></p>
                    <A href=AppRoute::Tasks.path()>"Go to your tasks"</A>
                }
                    .into_any(),
                None => view! {
                    <p>"Keep track of what needs doing."</p>
                    <p>
                        <A href=AppRoute::Login.path()>"Log in"</A>
                        " or "
                        <A href=AppRoute::Signup.path()>"create an account"</A>
                    </p>
                }
                    .into_any(),
            }}
        </section>
    }
}
