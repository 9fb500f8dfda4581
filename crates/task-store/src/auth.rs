//! Auth Store
//!
//! Current user, bearer token and authenticated flag, mirrored into
//! persistent storage under `auth_token` / `user_data`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::config::endpoints;
use crate::error::{Result, StoreError};
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, User};
use crate::storage::{KeyValueStore, AUTH_TOKEN_KEY, USER_DATA_KEY};
use crate::transport::Method;

const LOGIN_FAILED: &str = "Login failed";
const SIGNUP_FAILED: &str = "Signup failed";
const TOKEN_NOT_FOUND: &str = "Token not found";
const CURRENT_USER_FAILED: &str = "Failed to fetch current user";

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// Flag, token and user all present
    pub fn is_logged_in(&self) -> bool {
        self.is_authenticated && self.token.is_some() && self.user.is_some()
    }
}

/// Read access to the current bearer token
pub trait TokenProvider {
    fn bearer_token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String>,
{
    fn bearer_token(&self) -> Option<String> {
        self()
    }
}

pub struct AuthStore {
    api: ApiClient,
    storage: Rc<dyn KeyValueStore>,
    state: RefCell<AuthState>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("api", &self.api)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    pub fn new(api: ApiClient, storage: Rc<dyn KeyValueStore>) -> Self {
        Self { api, storage, state: RefCell::new(AuthState::default()) }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    /// Exchange credentials for a session
    pub async fn login(&self, credentials: &LoginRequest) -> Result<()> {
        let request = self
            .api
            .request(Method::Post, endpoints::AUTH_LOGIN)
            .json(serde_json::to_value(credentials)?);
        let data: LoginResponse = self
            .api
            .json(request, LOGIN_FAILED)
            .await
            .inspect_err(|e| log::error!("Login failed: {}", e))?;

        self.persist(AUTH_TOKEN_KEY, &data.access_token);
        self.persist_user(&data.user);

        log::info!("Logged in as {}", data.user.email);
        let mut state = self.state.borrow_mut();
        state.user = Some(data.user);
        state.token = Some(data.access_token);
        state.is_authenticated = true;
        Ok(())
    }

    /// Register an account. Does not log in.
    pub async fn signup(&self, user_data: &SignupRequest) -> Result<SignupResponse> {
        let request = self
            .api
            .request(Method::Post, endpoints::AUTH_SIGNUP)
            .json(serde_json::to_value(user_data)?);
        let data: SignupResponse = self
            .api
            .json(request, SIGNUP_FAILED)
            .await
            .inspect_err(|e| log::error!("Signup failed: {}", e))?;

        log::info!("User registered: {}", data.message);
        Ok(data)
    }

    pub fn logout(&self) {
        self.forget(AUTH_TOKEN_KEY);
        self.forget(USER_DATA_KEY);
        *self.state.borrow_mut() = AuthState::default();
        log::info!("Logged out");
    }

    /// Restore a persisted session. Returns whether one was restored.
    ///
    /// Unreadable user data counts as no session and both keys are dropped.
    pub fn load_from_storage(&self) -> bool {
        let token = self.read(AUTH_TOKEN_KEY);
        let user_data = self.read(USER_DATA_KEY);
        let (Some(token), Some(user_data)) = (token, user_data) else {
            return false;
        };

        match serde_json::from_str::<User>(&user_data) {
            Ok(user) => {
                log::debug!("Restored session for {}", user.email);
                let mut state = self.state.borrow_mut();
                state.token = Some(token);
                state.user = Some(user);
                state.is_authenticated = true;
                true
            }
            Err(e) => {
                log::error!("Discarding corrupted session data: {}", e);
                self.forget(AUTH_TOKEN_KEY);
                self.forget(USER_DATA_KEY);
                false
            }
        }
    }

    /// Refetch the logged-in user. A 401 ends the session.
    pub async fn get_current_user(&self) -> Result<User> {
        let token = self.token().ok_or(StoreError::MissingToken(TOKEN_NOT_FOUND))?;
        let request = self.api.request(Method::Get, endpoints::AUTH_ME).bearer(token);
        let response = self
            .api
            .send(request)
            .await
            .inspect_err(|e| log::error!("Failed to fetch current user: {}", e))?;

        if response.status == 401 {
            log::warn!("Session expired, logging out");
            self.logout();
            return Err(StoreError::SessionExpired);
        }
        if !response.is_success() {
            log::error!("Failed to fetch current user: HTTP {}", response.status);
            return Err(StoreError::api(response.status, CURRENT_USER_FAILED));
        }

        let user: User = response.json()?;
        self.persist_user(&user);
        self.state.borrow_mut().user = Some(user.clone());
        Ok(user)
    }

    // ========================
    // Storage Helpers
    // ========================

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            log::warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.persist(USER_DATA_KEY, &json),
            Err(e) => log::warn!("Failed to serialize user: {}", e),
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            log::warn!("Failed to remove {}: {}", key, e);
        }
    }
}

impl TokenProvider for AuthStore {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{client, make_user, user_json, MockTransport, TEST_BASE};
    use crate::storage::{MemoryStorage, StorageError};
    use serde_json::json;

    fn setup() -> (Rc<MockTransport>, Rc<MemoryStorage>, AuthStore) {
        let transport = MockTransport::new();
        let storage = Rc::new(MemoryStorage::new());
        let store = AuthStore::new(client(&transport), storage.clone());
        (transport, storage, store)
    }

    fn credentials() -> LoginRequest {
        LoginRequest { email: "ann@example.com".into(), password: "hunter2!x".into() }
    }

    fn login_body() -> serde_json::Value {
        json!({
            "user": user_json(1, "ann@example.com"),
            "access_token": "tok-123",
            "token_type": "Bearer"
        })
    }

    #[tokio::test]
    async fn test_login_sets_session_and_storage() {
        let (transport, storage, store) = setup();
        transport.respond(200, login_body());

        store.login(&credentials()).await.expect("login failed");

        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok-123"));
        let persisted: User = serde_json::from_str(&storage.get(USER_DATA_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, make_user(1, "ann@example.com"));

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, format!("{}/api/v1/auth/login", TEST_BASE));
        assert_eq!(sent.bearer, None);
        assert_eq!(sent.body, Some(json!({ "email": "ann@example.com", "password": "hunter2!x" })));
    }

    #[tokio::test]
    async fn test_login_failure_uses_detail() {
        let (transport, storage, store) = setup();
        transport.respond(401, json!({ "detail": "Invalid email or password" }));

        let err = store.login(&credentials()).await.unwrap_err();

        assert_eq!(err, StoreError::api(401, "Invalid email or password"));
        assert!(!store.is_logged_in());
        assert!(!storage.contains(AUTH_TOKEN_KEY));
    }

    #[tokio::test]
    async fn test_login_failure_default_message() {
        let (transport, _storage, store) = setup();
        transport.respond(500, json!({}));

        let err = store.login(&credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[tokio::test]
    async fn test_signup_leaves_session_untouched() {
        let (transport, storage, store) = setup();
        transport.respond(201, json!({
            "user": user_json(2, "bob@example.com"),
            "message": "User registered"
        }));

        let req = SignupRequest { email: "bob@example.com".into(), password: "secret1!x".into() };
        let resp = store.signup(&req).await.expect("signup failed");

        assert_eq!(resp.message, "User registered");
        assert!(!store.is_authenticated());
        assert!(!storage.contains(AUTH_TOKEN_KEY));
        assert!(!storage.contains(USER_DATA_KEY));
    }

    #[tokio::test]
    async fn test_signup_conflict() {
        let (transport, _storage, store) = setup();
        transport.respond(409, json!({ "detail": "User already exists" }));

        let req = SignupRequest { email: "bob@example.com".into(), password: "secret1!x".into() };
        let err = store.signup(&req).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let (transport, storage, store) = setup();
        transport.respond(200, login_body());
        store.login(&credentials()).await.unwrap();

        store.logout();

        assert_eq!(store.state(), AuthState::default());
        assert!(!store.is_logged_in());
        assert!(!storage.contains(AUTH_TOKEN_KEY));
        assert!(!storage.contains(USER_DATA_KEY));
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_load_from_storage_without_keys() {
        let (_transport, _storage, store) = setup();
        assert!(!store.load_from_storage());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_load_from_storage_restores_session() {
        let (transport, storage, store) = setup();
        storage.set(AUTH_TOKEN_KEY, "tok-9").unwrap();
        storage.set(USER_DATA_KEY, &user_json(9, "zoe@example.com").to_string()).unwrap();

        assert!(store.load_from_storage());

        assert!(store.is_logged_in());
        assert_eq!(store.user().map(|u| u.id), Some(9));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_load_from_storage_needs_both_keys() {
        let (_transport, storage, store) = setup();
        storage.set(AUTH_TOKEN_KEY, "tok-9").unwrap();

        assert!(!store.load_from_storage());
        assert!(!store.is_authenticated());
        assert!(storage.contains(AUTH_TOKEN_KEY));
    }

    #[test]
    fn test_load_from_storage_discards_corrupted_user() {
        let (_transport, storage, store) = setup();
        storage.set(AUTH_TOKEN_KEY, "tok-9").unwrap();
        storage.set(USER_DATA_KEY, "{not json").unwrap();

        assert!(!store.load_from_storage());

        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert!(!storage.contains(AUTH_TOKEN_KEY));
        assert!(!storage.contains(USER_DATA_KEY));
    }

    #[tokio::test]
    async fn test_get_current_user_without_token() {
        let (transport, _storage, store) = setup();

        let err = store.get_current_user().await.unwrap_err();

        assert_eq!(err, StoreError::MissingToken("Token not found"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_get_current_user_refreshes_user() {
        let (transport, storage, store) = setup();
        transport.respond(200, login_body());
        store.login(&credentials()).await.unwrap();
        transport.respond(200, user_json(1, "ann@new.example.com"));

        let user = store.get_current_user().await.expect("refresh failed");

        assert_eq!(user.email, "ann@new.example.com");
        assert_eq!(store.user(), Some(user.clone()));
        let persisted: User = serde_json::from_str(&storage.get(USER_DATA_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, user);

        let sent = &transport.requests()[1];
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, format!("{}/api/v1/auth/me", TEST_BASE));
        assert_eq!(sent.bearer.as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_get_current_user_401_logs_out() {
        let (transport, storage, store) = setup();
        transport.respond(200, login_body());
        store.login(&credentials()).await.unwrap();
        transport.respond(401, json!({ "detail": "Could not validate credentials" }));

        let err = store.get_current_user().await.unwrap_err();

        assert_eq!(err, StoreError::SessionExpired);
        assert_eq!(store.state(), AuthState::default());
        assert!(!storage.contains(AUTH_TOKEN_KEY));
        assert!(!storage.contains(USER_DATA_KEY));
    }

    #[tokio::test]
    async fn test_get_current_user_other_failure_keeps_session() {
        let (transport, _storage, store) = setup();
        transport.respond(200, login_body());
        store.login(&credentials()).await.unwrap();
        transport.respond(503, json!({ "detail": "maintenance" }));

        let err = store.get_current_user().await.unwrap_err();

        assert_eq!(err, StoreError::api(503, "Failed to fetch current user"));
        assert!(store.is_logged_in());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let (transport, _storage, store) = setup();
        transport.fail(StoreError::Transport("connection refused".into()));

        let err = store.login(&credentials()).await.unwrap_err();
        assert_eq!(err, StoreError::Transport("connection refused".into()));
    }

    /// Storage whose reads come back empty and whose writes all fail
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> std::result::Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError("quota exceeded".into()))
        }
    }

    #[tokio::test]
    async fn test_storage_write_failures_do_not_fail_session() {
        let transport = MockTransport::new();
        let store = AuthStore::new(client(&transport), Rc::new(ReadOnlyStorage));
        transport.respond(200, login_body());

        store.login(&credentials()).await.expect("login failed");
        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        transport.respond(200, user_json(1, "ann@new.example.com"));
        let user = store.get_current_user().await.expect("refresh failed");
        assert_eq!(store.user(), Some(user));

        store.logout();
        assert_eq!(store.state(), AuthState::default());
    }

    #[test]
    fn test_token_provider() {
        let (_transport, storage, store) = setup();
        storage.set(AUTH_TOKEN_KEY, "tok-5").unwrap();
        storage.set(USER_DATA_KEY, &user_json(5, "eve@example.com").to_string()).unwrap();
        store.load_from_storage();

        assert_eq!(store.bearer_token().as_deref(), Some("tok-5"));
        let fixed = || Some("static".to_string());
        assert_eq!(fixed.bearer_token().as_deref(), Some("static"));
    }
}
