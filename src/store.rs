//! Global Application State Store
//!
//! Reactive mirror of the auth and tasks stores, using reactive_stores for
//! field-level reactivity. Components read from here; only the sync helpers
//! below write to it.

use leptos::prelude::*;
use reactive_stores::Store;
use task_store::{AuthState, SignupResponse, Task, TasksStore, User};

/// What the views render
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, if any
    pub user: Option<User>,
    /// Flag, token and user all present
    pub is_logged_in: bool,
    /// Tasks in server order, new ones appended
    pub tasks: Vec<Task>,
    pub completed_count: usize,
    pub pending_count: usize,
    pub is_loading: bool,
    /// Last task operation failure
    pub error: Option<String>,
    /// One-off message for the next page, e.g. after signup
    pub notice: Option<String>,
}

pub type AppStore = Store<AppState>;

// ========================
// Store Sync Helpers
// ========================

/// Copy the session into the store
pub fn store_set_session(store: &AppStore, auth: &AuthState) {
    store.user().set(auth.user.clone());
    store.is_logged_in().set(auth.is_logged_in());
}

/// Message shown on the login page after a successful signup
pub fn signup_notice(resp: &SignupResponse) -> String {
    let message = resp.message.trim().trim_end_matches('.');
    format!("{}. Log in as {} to continue.", message, resp.user.email)
}

/// Completion flag of the task with `id`, if the list holds it
pub fn task_completed(tasks: &[Task], id: i64) -> Option<bool> {
    tasks.iter().find(|t| t.id == id).map(|t| t.is_completed)
}

/// Copy task list, derived counts, loading flag and error into the store
pub fn store_set_tasks(store: &AppStore, tasks: &TasksStore) {
    let state = tasks.state();
    store.completed_count().set(tasks.completed_tasks().len());
    store.pending_count().set(tasks.pending_tasks().len());
    store.tasks().set(state.tasks);
    store.is_loading().set(state.is_loading);
    store.error().set(state.error);
}
