//! Taskboard Stores
//!
//! Session and task state for the Taskboard front end, independent of any
//! UI framework. Network access goes through `HttpTransport` and the
//! persisted session through `KeyValueStore`, so both can be swapped out.
//!
//! - config: base URL and endpoint table
//! - transport / api: HTTP seam and the shared error convention
//! - auth: login, signup, logout, session restore, current user
//! - tasks: task list CRUD and derived views

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod tasks;
pub mod transport;
mod validation;

#[cfg(test)]
mod mock;

pub use api::ApiClient;
pub use auth::{AuthState, AuthStore, TokenProvider};
pub use config::{create_api_url, ApiConfig};
pub use error::{Result, StoreError};
pub use models::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, Task, TaskCreate, TaskListResponse,
    TaskUpdate, User,
};
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use tasks::{TasksState, TasksStore};
pub use transport::{HttpTransport, ReqwestTransport};
pub use validation::validate_input;
