//! Shared test helpers: an in-memory backend behind `HttpTransport`

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use homepage_admin::bookmarks::BookmarkManager;
use homepage_admin::client::{
    ApiClient, ApiRequest, ApiResponse, AuthSession, HttpTransport, Method, SessionStore,
};
use homepage_admin::dashboard::Dashboard;
use homepage_admin::errors::Result;
use homepage_admin::notify::Notifier;

pub const BASE_URL: &str = "http://backend:8000";

/// 按 (method, path) 返回预设响应并记录所有请求
#[derive(Default)]
pub struct MockBackend {
    routes: Mutex<Vec<(Method, String, ApiResponse)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Later registrations win over earlier ones for the same route
    pub fn on(&self, method: Method, path: &str, response: ApiResponse) {
        self.routes
            .lock()
            .insert(0, (method, path.to_string(), response));
    }

    pub fn on_json(&self, method: Method, path: &str, status: u16, body: Value) {
        self.on(method, path, ApiResponse::json(status, &body));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Requests other than plain reads, as `"METHOD path"`
    pub fn writes(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter(|r| r.method != Method::Get)
            .map(|r| format!("{} {}", r.method, path_of(r)))
            .collect()
    }

    pub fn find(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests()
            .into_iter()
            .find(|r| r.method == method && path_of(r) == path)
    }

    pub fn clear(&self) {
        self.requests.lock().clear();
    }
}

pub fn path_of(request: &ApiRequest) -> &str {
    request.url.strip_prefix(BASE_URL).unwrap_or(&request.url)
}

pub fn body_json(request: &ApiRequest) -> Value {
    request
        .body
        .as_deref()
        .map(|b| serde_json::from_slice(b).unwrap())
        .unwrap_or(Value::Null)
}

#[async_trait]
impl HttpTransport for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().push(request.clone());
        let path = path_of(&request).to_string();
        let response = self
            .routes
            .lock()
            .iter()
            .find(|(method, route, _)| *method == request.method && *route == path)
            .map(|(_, _, response)| response.clone())
            .unwrap_or_else(|| ApiResponse::json(200, &json!({"message": "ok"})));
        Ok(response)
    }
}

pub fn client(backend: &Arc<MockBackend>) -> ApiClient {
    let session = Arc::new(AuthSession::new(SessionStore::in_memory()));
    session.set_token("test-token").unwrap();
    ApiClient::new(BASE_URL, backend.clone(), session)
}

pub fn dashboard(backend: &Arc<MockBackend>) -> Dashboard {
    Dashboard::new(client(backend), Notifier::new(Duration::from_secs(60)))
}

pub fn bookmark_manager(backend: &Arc<MockBackend>) -> BookmarkManager {
    BookmarkManager::new(client(backend))
}

/// Two categories in a fixed order
pub fn sample_configuration() -> Value {
    json!({
        "Media": [
            {"name": "Jellyfin", "config": {"href": "http://10.0.0.2:8096", "icon": "jellyfin.png"}},
            {"name": "Sonarr", "config": {"href": "http://10.0.0.2:8989"}},
            {"name": "Radarr", "config": {"href": "http://10.0.0.2:7878"}}
        ],
        "Network": [
            {"name": "Pi-hole", "config": {"href": "http://10.0.0.3/admin", "ping": "10.0.0.3"}},
            {"name": "Router", "config": {"href": "http://10.0.0.1", "hidden": true, "healthCheckDisabled": true}}
        ]
    })
}

pub fn serve_configuration(backend: &MockBackend, configuration: Value) {
    backend.on_json(Method::Get, "/api/services/", 200, configuration);
}
