//! Not Found View

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{enter_page, AppRoute};

#[component]
pub fn NotFoundView() -> impl IntoView {
    enter_page(AppRoute::NotFound);
    view! {
        <section class="not-found-view">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href=AppRoute::Home.path()>"Back to the start page"</A>
        </section>
    }
}
