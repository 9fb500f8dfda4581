//! Task Item Component
//!
//! One row of the task list: completion checkbox, title/description,
//! inline editing and delete.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use task_store::{validate_input, Task, TaskUpdate};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{task_completed, AppStateStoreFields};

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;

    let (editing, set_editing) = signal(false);
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone().unwrap_or_default());
    let (invalid, set_invalid) = signal::<Option<String>>(None);

    let original_title = task.title.clone();
    let original_description = task.description.clone().unwrap_or_default();

    let completed = task.is_completed;
    let checkbox = NodeRef::<Input>::new();
    let is_checked = move || ctx.store.tasks().with(|tasks| task_completed(tasks, id)).unwrap_or(completed);

    let toggle = move |_| {
        spawn_local(async move {
            if ctx.toggle_task(id).await.is_err() {
                // The browser already flipped the box
                let stored = ctx.store.tasks().with_untracked(|tasks| task_completed(tasks, id));
                if let Some(input) = checkbox.get_untracked() {
                    input.set_checked(stored.unwrap_or(completed));
                }
            }
        });
    };

    let delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = ctx.delete_task(id).await;
        });
    });

    // Only changed fields go into the patch
    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_title = title.get().trim().to_string();
        let new_description = description.get().trim().to_string();
        let patch = TaskUpdate {
            title: (new_title != original_title).then_some(new_title),
            description: (new_description != original_description).then_some(new_description),
            is_completed: None,
        };
        if patch.is_empty() {
            set_editing.set(false);
            return;
        }
        if let Err(e) = validate_input(&patch) {
            set_invalid.set(Some(e.to_string()));
            return;
        }
        set_invalid.set(None);
        spawn_local(async move {
            if ctx.update_task(id, patch).await.is_ok() {
                set_editing.set(false);
            }
        });
    };

    let created = task
        .created()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| task.created_at.clone());
    let row_class = if completed { "task-item completed" } else { "task-item" };

    view! {
        <li class=row_class>
            <input type="checkbox" node_ref=checkbox prop:checked=is_checked on:change=toggle />
            <Show
                when=move || editing.get()
                fallback=move || {
                    let task = task.clone();
                    let created = created.clone();
                    view! {
                        <div class="task-body" on:dblclick=move |_| set_editing.set(true)>
                            <span class="task-title">{task.title}</span>
                            {task.description.map(|d| view! { <p class="task-description">{d}</p> })}
                            <span class="task-date">{created}</span>
                        </div>
                        <button type="button" class="edit-btn" on:click=move |_| set_editing.set(true)>
                            "Edit"
                        </button>
                    }
                }
            >
                <form class="task-edit-form" on:submit=save.clone()>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    {move || invalid.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <button type="submit">"Save"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </form>
            </Show>
            <DeleteConfirmButton on_confirm=delete />
        </li>
    }
}
