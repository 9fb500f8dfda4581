//! Tasks Store
//!
//! In-memory mirror of the user's tasks. The list is replaced wholesale by
//! `fetch_tasks` and patched by create/update/delete.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::config::endpoints;
use crate::error::{Result, StoreError};
use crate::models::{Task, TaskCreate, TaskListResponse, TaskUpdate};
use crate::transport::{ApiRequest, Method};

const TOKEN_MISSING: &str = "Authorization token not found";
const FETCH_FAILED: &str = "Failed to fetch tasks";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETE_FAILED: &str = "Failed to delete task";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub struct TasksStore {
    api: ApiClient,
    tokens: Rc<dyn TokenProvider>,
    state: RefCell<TasksState>,
}

impl std::fmt::Debug for TasksStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TasksStore")
            .field("api", &self.api)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl TasksStore {
    pub fn new(api: ApiClient, tokens: Rc<dyn TokenProvider>) -> Self {
        Self { api, tokens, state: RefCell::new(TasksState::default()) }
    }

    pub fn state(&self) -> TasksState {
        self.state.borrow().clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    // ========================
    // Derived Views
    // ========================

    pub fn completed_tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.iter().filter(|t| t.is_completed).cloned().collect()
    }

    pub fn pending_tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.iter().filter(|t| !t.is_completed).cloned().collect()
    }

    pub fn total_tasks(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    // ========================
    // Actions
    // ========================

    /// Replace the local list with the server's
    pub async fn fetch_tasks(&self) -> Result<()> {
        self.tracked("fetch tasks", async {
            let request = self.authorized(Method::Get, endpoints::TASKS_LIST)?;
            let data: TaskListResponse = self.api.json(request, FETCH_FAILED).await?;
            log::debug!("Fetched {} of {} tasks", data.tasks.len(), data.total);
            self.state.borrow_mut().tasks = data.tasks;
            Ok(())
        })
        .await
    }

    /// Create a task and append it to the end of the list
    pub async fn create_task(&self, data: &TaskCreate) -> Result<Task> {
        self.tracked("create task", async {
            let request = self
                .authorized(Method::Post, endpoints::TASKS_CREATE)?
                .json(serde_json::to_value(data)?);
            let task: Task = self.api.json(request, CREATE_FAILED).await?;
            self.state.borrow_mut().tasks.push(task.clone());
            Ok(task)
        })
        .await
    }

    /// Patch a task and replace the local copy in place.
    ///
    /// A task the list is not tracking stays untracked: the server's record
    /// is returned but not inserted.
    pub async fn update_task(&self, id: i64, patch: &TaskUpdate) -> Result<Task> {
        self.tracked("update task", async {
            let request = self
                .authorized(Method::Patch, &endpoints::task_update(id))?
                .json(serde_json::to_value(patch)?);
            let updated: Task = self.api.json(request, UPDATE_FAILED).await?;
            if let Some(slot) = self.state.borrow_mut().tasks.iter_mut().find(|t| t.id == id) {
                *slot = updated.clone();
            }
            Ok(updated)
        })
        .await
    }

    /// Delete a task; removing an id the list no longer holds is not an error
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.tracked("delete task", async {
            let request = self.authorized(Method::Delete, &endpoints::task_delete(id))?;
            self.api.ack(request, DELETE_FAILED).await?;
            self.state.borrow_mut().tasks.retain(|t| t.id != id);
            Ok(())
        })
        .await
    }

    /// Flip completion of a locally known task
    pub async fn toggle_task_completion(&self, id: i64) -> Result<Task> {
        let is_completed = self
            .state
            .borrow()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.is_completed)
            .ok_or(StoreError::TaskNotFound(id))?;

        self.update_task(id, &TaskUpdate::completion(!is_completed)).await
    }

    pub fn clear_error(&self) {
        self.state.borrow_mut().error = None;
    }

    pub fn clear_tasks(&self) {
        *self.state.borrow_mut() = TasksState::default();
    }

    // ========================
    // Helpers
    // ========================

    fn authorized(&self, method: Method, endpoint: &str) -> Result<ApiRequest> {
        let token = self
            .tokens
            .bearer_token()
            .ok_or(StoreError::MissingToken(TOKEN_MISSING))?;
        Ok(self.api.request(method, endpoint).bearer(token))
    }

    /// Run `action` with the loading flag raised, recording any error
    async fn tracked<T>(&self, what: &str, action: impl Future<Output = Result<T>>) -> Result<T> {
        {
            let mut state = self.state.borrow_mut();
            state.is_loading = true;
            state.error = None;
        }

        let result = action.await;

        let mut state = self.state.borrow_mut();
        state.is_loading = false;
        if let Err(e) = &result {
            log::error!("Failed to {}: {}", what, e);
            state.error = Some(e.to_string());
        }
        result
    }
}
