//! UI Components
//!
//! Page views and the reusable pieces they are built from.

mod nav_bar;
mod home_view;
mod login_view;
mod signup_view;
mod tasks_view;
mod not_found_view;
mod new_task_form;
mod task_item;
mod error_banner;
mod delete_confirm_button;
mod log_panel;

pub use nav_bar::NavBar;
pub use home_view::HomeView;
pub use login_view::LoginView;
pub use signup_view::SignupView;
pub use tasks_view::TasksView;
pub use not_found_view::NotFoundView;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use error_banner::ErrorBanner;
pub use delete_confirm_button::DeleteConfirmButton;
pub use log_panel::LogPanel;
