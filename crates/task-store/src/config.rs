//! API Configuration
//!
//! Base URL and the static table of backend endpoint paths.

/// Build-time override for the API base URL (empty = same origin)
pub const BASE_URL_ENV: Option<&str> = option_env!("TASKBOARD_API_BASE_URL");

/// Endpoint paths consumed by the stores
pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
    pub const AUTH_SIGNUP: &str = "/api/v1/auth/signup";
    pub const AUTH_ME: &str = "/api/v1/auth/me";

    pub const TASKS_LIST: &str = "/api/v1/tasks";
    pub const TASKS_CREATE: &str = "/api/v1/tasks";

    /// PATCH target for a single task
    pub fn task_update(id: i64) -> String {
        format!("/api/v1/tasks/{}", id)
    }

    /// DELETE target for a single task
    pub fn task_delete(id: i64) -> String {
        format!("/api/v1/tasks/{}", id)
    }
}

/// Concatenate a base URL and an endpoint path
pub fn create_api_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url, endpoint)
}

/// Where the stores send their requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Config baked in at compile time from `TASKBOARD_API_BASE_URL`
    pub fn from_env() -> Self {
        Self::new(BASE_URL_ENV.unwrap_or_default())
    }

    /// Use `origin` when no base URL was configured.
    ///
    /// The HTTP client only accepts absolute URLs, so the browser passes
    /// `window.location.origin` here to keep same-origin behaviour.
    pub fn or_origin(self, origin: &str) -> Self {
        if self.base_url.is_empty() {
            Self::new(origin.trim_end_matches('/'))
        } else {
            self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        create_api_url(&self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_api_url() {
        assert_eq!(create_api_url("", endpoints::AUTH_LOGIN), "/api/v1/auth/login");
        assert_eq!(
            create_api_url("https://api.example.com", endpoints::TASKS_LIST),
            "https://api.example.com/api/v1/tasks"
        );
    }

    #[test]
    fn test_parameterized_endpoints() {
        assert_eq!(endpoints::task_update(7), "/api/v1/tasks/7");
        assert_eq!(endpoints::task_delete(42), "/api/v1/tasks/42");
    }

    #[test]
    fn test_or_origin_only_fills_empty_base() {
        let same_origin = ApiConfig::new("").or_origin("http://localhost:8080/");
        assert_eq!(same_origin.base_url(), "http://localhost:8080");

        let explicit = ApiConfig::new("https://api.example.com").or_origin("http://localhost:8080");
        assert_eq!(explicit.url(endpoints::AUTH_ME), "https://api.example.com/api/v1/auth/me");
    }
}
