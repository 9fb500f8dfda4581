//! Taskboard Frontend App
//!
//! Wires the stores to the browser, restores a saved session and mounts the
//! router.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use rolling_logger::RollingLogger;
use task_store::ApiConfig;

use crate::components::{HomeView, LogPanel, LoginView, NavBar, NotFoundView, SignupView, TasksView};
use crate::config::browser_origin;
use crate::context::{AppContext, Services};
use crate::storage::browser_or_memory;
use crate::store::AppState;

/// Root component; `logger` is the installed log backend, if any
#[component]
pub fn App(logger: Option<&'static RollingLogger>) -> impl IntoView {
    let config = ApiConfig::from_env().or_origin(&browser_origin());
    log::info!("Using API at {}", config.base_url());

    let services = Services::new(config, browser_or_memory());
    let restored = services.auth.load_from_storage();

    let ctx = AppContext::new(services, Store::new(AppState::default()));
    ctx.sync_session();
    provide_context(ctx);

    // A restored session may be stale; the refresh logs out on 401
    if restored {
        spawn_local(async move {
            if let Err(e) = ctx.refresh_user().await {
                log::warn!("Could not refresh restored session: {}", e);
            }
        });
    }

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <NotFoundView /> }>
                    <Route path=path!("/") view=HomeView />
                    <Route path=path!("/signup") view=SignupView />
                    <Route path=path!("/login") view=LoginView />
                    <Route path=path!("/tasks") view=TasksView />
                </Routes>
            </main>
            {logger.map(|logger| view! { <LogPanel logger=logger /> })}
        </Router>
    }
}
