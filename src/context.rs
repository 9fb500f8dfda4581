//! Application Context
//!
//! The auth and tasks stores plus their reactive mirror, provided via the
//! Leptos Context API. Every action runs the store operation, then syncs
//! the mirror so views re-render.

use std::rc::Rc;

use leptos::prelude::*;
use task_store::{
    ApiClient, ApiConfig, AuthStore, HttpTransport, KeyValueStore, LoginRequest, ReqwestTransport, SignupRequest,
    SignupResponse, StoreError, Task, TaskCreate, TaskUpdate, TasksStore, User,
};

use crate::store::{store_set_session, store_set_tasks, AppStore, AppStateStoreFields};

/// Stores wired to one transport and one storage backend
#[derive(Clone)]
pub struct Services {
    pub auth: Rc<AuthStore>,
    pub tasks: Rc<TasksStore>,
}

impl Services {
    pub fn new(config: ApiConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        let transport: Rc<dyn HttpTransport> = Rc::new(ReqwestTransport::new());
        let api = ApiClient::new(transport, config);
        let auth = Rc::new(AuthStore::new(api.clone(), storage));
        let tasks = Rc::new(TasksStore::new(api, auth.clone()));
        Self { auth, tasks }
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
    /// Reactive state for views
    pub store: AppStore,
}

impl AppContext {
    pub fn new(services: Services, store: AppStore) -> Self {
        Self { services: StoredValue::new_local(services), store }
    }

    fn services(&self) -> Services {
        self.services.get_value()
    }

    pub fn sync_session(&self) {
        let state = self.services.with_value(|s| s.auth.state());
        store_set_session(&self.store, &state);
    }

    pub fn sync_tasks(&self) {
        self.services.with_value(|s| store_set_tasks(&self.store, &s.tasks));
    }

    // ========================
    // Auth Actions
    // ========================

    pub async fn login(self, credentials: LoginRequest) -> Result<(), StoreError> {
        let result = self.services().auth.login(&credentials).await;
        self.sync_session();
        result
    }

    pub async fn signup(self, user_data: SignupRequest) -> Result<SignupResponse, StoreError> {
        self.services().auth.signup(&user_data).await
    }

    /// End the session and drop the task list
    pub fn logout(&self) {
        self.services.with_value(|s| {
            s.auth.logout();
            s.tasks.clear_tasks();
        });
        self.sync_session();
        self.sync_tasks();
    }

    /// Refetch the user; an expired session also drops the task list
    pub async fn refresh_user(self) -> Result<User, StoreError> {
        let services = self.services();
        let result = services.auth.get_current_user().await;
        if matches!(result, Err(StoreError::SessionExpired)) {
            services.tasks.clear_tasks();
            self.sync_tasks();
        }
        self.sync_session();
        result
    }

    // ========================
    // Task Actions
    // ========================

    pub async fn fetch_tasks(self) -> Result<(), StoreError> {
        self.store.is_loading().set(true);
        let result = self.services().tasks.fetch_tasks().await;
        self.sync_tasks();
        result
    }

    pub async fn create_task(self, data: TaskCreate) -> Result<Task, StoreError> {
        self.store.is_loading().set(true);
        let result = self.services().tasks.create_task(&data).await;
        self.sync_tasks();
        result
    }

    pub async fn update_task(self, id: i64, patch: TaskUpdate) -> Result<Task, StoreError> {
        self.store.is_loading().set(true);
        let result = self.services().tasks.update_task(id, &patch).await;
        self.sync_tasks();
        result
    }

    pub async fn delete_task(self, id: i64) -> Result<(), StoreError> {
        self.store.is_loading().set(true);
        let result = self.services().tasks.delete_task(id).await;
        self.sync_tasks();
        result
    }

    pub async fn toggle_task(self, id: i64) -> Result<Task, StoreError> {
        let result = self.services().tasks.toggle_task_completion(id).await;
        self.sync_tasks();
        result
    }

    pub fn clear_error(&self) {
        self.services.with_value(|s| s.tasks.clear_error());
        self.sync_tasks();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
