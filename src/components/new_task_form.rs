//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_store::{validate_input, TaskCreate};

use crate::context::use_app_context;

/// Form for creating a task; new tasks land at the end of the list
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (invalid, set_invalid) = signal::<Option<String>>(None);

    let create_task = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let details = description.get();
        let mut data = TaskCreate::new(title.get().trim());
        if !details.trim().is_empty() {
            data = data.with_description(details.trim());
        }
        if let Err(e) = validate_input(&data) {
            set_invalid.set(Some(e.to_string()));
            return;
        }
        set_invalid.set(None);

        spawn_local(async move {
            if ctx.create_task(data).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <textarea
                placeholder="Details (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || invalid.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
