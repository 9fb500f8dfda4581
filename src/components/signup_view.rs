//! Signup View
//!
//! Registration form. Signing up does not log in; on success the user is
//! sent to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use task_store::{validate_input, SignupRequest};

use crate::context::use_app_context;
use crate::routes::{enter_page, AppRoute};
use crate::store::{signup_notice, AppStateStoreFields};

#[component]
pub fn SignupView() -> impl IntoView {
    enter_page(AppRoute::Signup);
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let user_data = SignupRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if let Err(e) = validate_input(&user_data) {
            set_error.set(Some(e.to_string()));
            return;
        }
        if user_data.password != confirm.get() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = ctx.signup(user_data).await;
            set_submitting.set(false);
            match result {
                Ok(resp) => {
                    ctx.store.notice().set(Some(signup_notice(&resp)));
                    navigate(AppRoute::Login.path(), Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="auth-view">
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Repeat password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <p class="form-hint">"At least 8 characters with a letter, a digit and a special character."</p>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already registered? "
                <A href=AppRoute::Login.path()>"Log in"</A>
            </p>
        </section>
    }
}
