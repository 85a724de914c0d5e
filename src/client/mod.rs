//! REST client for the Homepage-config backend
//!
//! All calls go through [`ApiClient`], which attaches the bearer token,
//! turns 401 into a login request and maps error payloads to
//! [`AdminError`]. Endpoint groups ([`ServicesApi`], [`BookmarksApi`], ...)
//! are thin typed wrappers borrowed from the client.

mod auth_api;
mod bookmarks_api;
mod config_api;
pub mod multipart;
pub mod paths;
mod services_api;
pub mod session;
mod transport;
mod ureq_transport;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::{AdminError, Result};
use multipart::MultipartBody;

pub use auth_api::AuthApi;
pub use bookmarks_api::BookmarksApi;
pub use config_api::{BackupSummary, ConfigApi};
pub use services_api::{CategoriesApi, ServicesApi};
pub use session::{AuthSession, SessionStore, TokenClaims};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
pub use ureq_transport::UreqTransport;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: Arc<AuthSession>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        session: Arc<AuthSession>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    /// Client for `api.base_url` over ureq
    pub fn from_config(session: Arc<AuthSession>) -> Self {
        let config = crate::config::get_config();
        Self::new(
            &config.api.base_url,
            Arc::new(UreqTransport::from_config()),
            session,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn services(&self) -> ServicesApi<'_> {
        ServicesApi::new(self)
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    pub fn bookmarks(&self) -> BookmarksApi<'_> {
        BookmarksApi::new(self)
    }

    pub fn config_io(&self) -> ConfigApi<'_> {
        ConfigApi::new(self)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        if let Some(token) = self.session.token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        let method = request.method;
        let url = request.url.clone();
        debug!("{} {}", method, url);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let detail = extract_detail(&response.body);
        if response.status == 401 {
            warn!("{} {} rejected with 401, session cleared", method, url);
            self.session.request_login();
            return Err(AdminError::unauthorized(
                detail.unwrap_or_else(|| "Not authenticated".to_string()),
            ));
        }
        debug!("{} {} -> {} {:?}", method, url, response.status, detail);
        Err(AdminError::rejected(response.status, detail))
    }

    fn json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiRequest> {
        let bytes = serde_json::to_vec(body)?;
        Ok(ApiRequest::new(method, self.url(path)).body("application/json", bytes))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::new(Method::Get, self.url(path)))
            .await?
            .decode()
    }

    /// Raw body, used for file downloads
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        Ok(self
            .execute(ApiRequest::new(Method::Get, self.url(path)))
            .await?
            .body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.json_request(Method::Post, path, body)?;
        self.execute(request).await?.decode()
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::new(Method::Post, self.url(path)))
            .await?
            .decode()
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.json_request(Method::Put, path, body)?;
        self.execute(request).await?.decode()
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::new(Method::Delete, self.url(path)))
            .await?
            .decode()
    }

    /// Multipart upload with the file under the `file` field
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<T> {
        let (content_type, body) = MultipartBody::new()
            .file("file", filename, "application/x-yaml", data)
            .finish();
        let request = ApiRequest::new(Method::Post, self.url(path)).body(&content_type, body);
        self.execute(request).await?.decode()
    }
}

/// Human-readable `detail` of an error payload.
///
/// FastAPI sends either a string or a list of `{loc, msg, type}` entries for
/// validation failures; the latter are joined with "; ".
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    struct Recorder {
        requests: Mutex<Vec<ApiRequest>>,
        reply: ApiResponse,
    }

    #[async_trait]
    impl HttpTransport for Recorder {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.lock().push(request);
            Ok(self.reply.clone())
        }
    }

    fn client(reply: ApiResponse) -> (ApiClient, Arc<Recorder>) {
        let recorder = Arc::new(Recorder {
            requests: Mutex::new(Vec::new()),
            reply,
        });
        let session = Arc::new(AuthSession::new(SessionStore::in_memory()));
        let client = ApiClient::new("http://backend:8000/", recorder.clone(), session);
        (client, recorder)
    }

    #[test]
    fn test_extract_detail_variants() {
        assert_eq!(
            extract_detail(br#"{"detail":"Category not found"}"#).as_deref(),
            Some("Category not found")
        );
        assert_eq!(
            extract_detail(br#"{"detail":[{"msg":"field required"},{"msg":"bad url"}]}"#).as_deref(),
            Some("field required; bad url")
        );
        assert_eq!(extract_detail(b"<html>oops</html>"), None);
        assert_eq!(extract_detail(br#"{"message":"x"}"#), None);
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let (client, recorder) = client(ApiResponse::json(200, &json!({})));
        client.session().set_token("secret").unwrap();
        let _: serde_json::Value = client.get("/api/services/").await.unwrap();

        let requests = recorder.requests.lock();
        assert_eq!(requests[0].url, "http://backend:8000/api/services/");
        assert_eq!(requests[0].header_value("authorization"), Some("Bearer secret"));
    }

    #[tokio::test]
    async fn test_no_token_no_header() {
        let (client, recorder) = client(ApiResponse::json(200, &json!({})));
        let _: serde_json::Value = client.get("/api/services/").await.unwrap();
        assert!(recorder.requests.lock()[0].header_value("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let (client, _) = client(ApiResponse::json(401, &json!({"detail": "Token expired"})));
        client.session().set_token("stale").unwrap();

        let err = client
            .post::<_, serde_json::Value>("/api/categories/", &json!({"name": "x"}))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!client.session().is_logged_in());
        assert!(client.session().take_login_request());
    }

    #[tokio::test]
    async fn test_rejected_carries_detail() {
        let (client, _) = client(ApiResponse::json(400, &json!({"detail": "Category already exists"})));
        let err = client
            .post::<_, serde_json::Value>("/api/categories/", &json!({"name": "Media"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Rejected { status: 400, .. }));
        assert_eq!(err.user_message("Failed to add category"), "Category already exists");
    }

    #[tokio::test]
    async fn test_upload_is_multipart() {
        let (client, recorder) = client(ApiResponse::json(200, &json!({"groups": 1})));
        let _: serde_json::Value = client
            .upload("/api/bookmarks/import", "bookmarks.yaml", b"- Dev: []")
            .await
            .unwrap();
        let requests = recorder.requests.lock();
        let content_type = requests[0].header_value("Content-Type").unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
        assert!(body.contains("name=\"file\"; filename=\"bookmarks.yaml\""));
    }
}
