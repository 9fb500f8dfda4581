//! Login View
//!
//! Email/password form. Navigates to the task list once logged in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use task_store::{validate_input, LoginRequest};

use crate::context::use_app_context;
use crate::routes::{enter_page, AppRoute};
use crate::store::AppStateStoreFields;

#[component]
pub fn LoginView() -> impl IntoView {
    enter_page(AppRoute::Login);
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let credentials = LoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if let Err(e) = validate_input(&credentials) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = ctx.login(credentials).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    ctx.store.notice().set(None);
                    set_password.set(String::new());
                    navigate(AppRoute::Tasks.path(), Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="auth-view">
            <h1>"Log in"</h1>
            {move || ctx.store.notice().get().map(|msg| view! { <p class="form-notice">{msg}</p> })}
            <form class="auth-form" on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-switch">
                "No account yet? "
                <A href=AppRoute::Signup.path()>"Sign up"</A>
            </p>
        </section>
    }
}
