//! Models
//!
//! Data structures matching the backend API payloads.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{deliverable_address, non_empty_patch, password_strength};

/// Account as returned by signup, login and the ME endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Task record owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    pub fn created(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse a backend timestamp.
///
/// The API emits UTC timestamps without an offset; RFC 3339 is accepted too.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
}

// ========================
// Auth Payloads
// ========================

/// Login only bounds the password length; strength rules apply at signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        email(message = "Enter a valid email address"),
        custom(function = "deliverable_address")
    )]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        email(message = "Enter a valid email address"),
        custom(function = "deliverable_address")
    )]
    pub email: String,
    #[validate(
        length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"),
        custom(function = "password_strength")
    )]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: User,
    pub message: String,
}

// ========================
// Task Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TaskCreate {
    #[validate(length(min = 2, max = 255, message = "Title must be between 2 and 255 characters"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
}

impl TaskCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial patch; unset fields are left out of the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "non_empty_patch"))]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 255, message = "Title must be between 2 and 255 characters"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskUpdate {
    pub fn completion(is_completed: bool) -> Self {
        Self { is_completed: Some(is_completed), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_completed.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub total: i64,
}

/// Error body of a non-success response
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable message from `detail`.
    ///
    /// `detail` is a plain string for domain errors and a list of
    /// `{msg, ...}` objects for request validation errors.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(entries) => {
                let msgs: Vec<&str> = entries
                    .iter()
                    .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
            }
            _ => None,
        }
    }
}
