//! Routes
//!
//! Link targets and page titles. Path matching is left to the router in
//! `app.rs`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Signup,
    Login,
    Tasks,
    NotFound,
}

impl AppRoute {
    /// Link target; NotFound links back home
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home | AppRoute::NotFound => "/",
            AppRoute::Signup => "/signup",
            AppRoute::Login => "/login",
            AppRoute::Tasks => "/tasks",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Home => "Taskboard",
            AppRoute::Signup => "Sign up · Taskboard",
            AppRoute::Login => "Log in · Taskboard",
            AppRoute::Tasks => "Tasks · Taskboard",
            AppRoute::NotFound => "Not found · Taskboard",
        }
    }
}

/// Called by each view on mount: set the document title and scroll to top
pub fn enter_page(route: AppRoute) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(document) = window.document() {
        document.set_title(route.title());
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
