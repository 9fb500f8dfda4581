//! Test doubles shared by the store unit tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{Task, User};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};

pub const TEST_BASE: &str = "http://api.test";

type SendHook = Box<dyn Fn(&ApiRequest)>;

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
    on_send: RefCell<Option<SendHook>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: impl Into<String>) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, err: crate::StoreError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    /// Run `hook` inside every `send`, while the caller is awaiting it
    pub fn on_send(&self, hook: impl Fn(&ApiRequest) + 'static) {
        *self.on_send.borrow_mut() = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(hook) = self.on_send.borrow().as_ref() {
            hook(&request);
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no response queued for {} {}", request.method.as_str(), request.url))
    }
}

pub fn client(transport: &Rc<MockTransport>) -> ApiClient {
    let transport: Rc<dyn HttpTransport> = transport.clone();
    ApiClient::new(transport, ApiConfig::new(TEST_BASE))
}

pub fn user_json(id: i64, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "created_at": "2024-05-01T10:00:00",
        "updated_at": "2024-05-01T10:00:00"
    })
}

pub fn make_user(id: i64, email: &str) -> User {
    serde_json::from_value(user_json(id, email)).unwrap()
}

pub fn task_json(id: i64, title: &str, is_completed: bool) -> Value {
    json!({
        "id": id,
        "user_id": 1,
        "title": title,
        "description": null,
        "is_completed": is_completed,
        "created_at": "2024-05-01T10:00:00",
        "updated_at": "2024-05-01T10:00:00"
    })
}

pub fn make_task(id: i64, title: &str, is_completed: bool) -> Task {
    serde_json::from_value(task_json(id, title, is_completed)).unwrap()
}
