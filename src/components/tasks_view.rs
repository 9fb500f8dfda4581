//! Tasks View
//!
//! The user's task list. Loads from the backend whenever a session becomes
//! active.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::{ErrorBanner, NewTaskForm, TaskItem};
use crate::context::use_app_context;
use crate::routes::{enter_page, AppRoute};
use crate::store::AppStateStoreFields;

#[component]
pub fn TasksView() -> impl IntoView {
    enter_page(AppRoute::Tasks);
    let ctx = use_app_context();
    let store = ctx.store;

    // Failures land in the error banner
    Effect::new(move |_| {
        if store.is_logged_in().get() {
            spawn_local(async move {
                let _ = ctx.fetch_tasks().await;
            });
        }
    });

    let counts = move || {
        format!(
            "{} tasks · {} pending · {} done",
            store.tasks().with(|t| t.len()),
            store.pending_count().get(),
            store.completed_count().get()
        )
    };

    view! {
        <section class="tasks-view">
            <Show
                when=move || store.is_logged_in().get()
                fallback=|| view! {
                    <p class="login-prompt">
                        <A href=AppRoute::Login.path()>"Log in"</A>
                        " to see your tasks."
                    </p>
                }
            >
                <h1>"Your tasks"</h1>
                <ErrorBanner />
                <NewTaskForm />
                <p class="task-counts">{counts}</p>
                <Show when=move || store.is_loading().get()>
                    <p class="loading">"Loading..."</p>
                </Show>
                <Show when=move || store.tasks().with(|t| t.is_empty()) && !store.is_loading().get()>
                    <p class="empty">"Nothing here yet."</p>
                </Show>
                <ul class="task-list">
                    <For
                        each=move || store.tasks().get()
                        key=|task| {
                            // Every editable field, so changes re-render the row
                            (
                                task.id,
                                task.title.clone(),
                                task.description.clone(),
                                task.is_completed,
                                task.updated_at.clone(),
                            )
                        }
                        children=move |task| view! { <TaskItem task=task /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
