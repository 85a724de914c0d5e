//! Persisted session state and the authentication guard
//!
//! The bearer token and the preview URL survive restarts in a small TOML
//! file. [`AuthSession`] is shared by the [`super::ApiClient`] (which attaches
//! the token and reacts to 401) and the UI (which consumes login requests).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{AdminError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// TOML-backed key/value store. Without a path it only lives in memory.
#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    data: RwLock<SessionData>,
}

impl SessionStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open `path`, starting empty when the file is missing or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed session file {}: {}", path.display(), e);
                SessionData::default()
            }),
            Err(_) => SessionData::default(),
        };
        Self {
            path: Some(path),
            data: RwLock::new(data),
        }
    }

    /// Store at `session.state_file` (or the default state directory)
    pub fn from_config() -> Self {
        Self::open(crate::config::get_config().state_file())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> SessionData {
        self.data.read().clone()
    }

    pub fn update<F: FnOnce(&mut SessionData)>(&self, f: F) -> Result<()> {
        let snapshot = {
            let mut data = self.data.write();
            f(&mut data);
            data.clone()
        };
        self.persist(&snapshot)
    }

    fn persist(&self, data: &SessionData) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(data)?;
        std::fs::write(path, content).map_err(|e| {
            AdminError::file_operation(format!(
                "Failed to write session file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Claims shown to the user; the signature is never checked client-side
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT
    pub fn decode(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp?, 0)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

#[derive(Debug)]
pub struct AuthSession {
    store: SessionStore,
    login_requested: AtomicBool,
}

impl AuthSession {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            login_requested: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.snapshot().token.filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.login_requested.store(false, Ordering::SeqCst);
        self.store
            .update(|data| data.token = Some(token.to_string()))
    }

    pub fn remove_token(&self) {
        if let Err(e) = self.store.update(|data| data.token = None) {
            warn!("Failed to clear stored token: {}", e);
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        TokenClaims::decode(&self.token()?)
    }

    /// Drop credentials and ask the UI to show the login view
    pub fn request_login(&self) {
        debug!("Login requested");
        self.remove_token();
        self.login_requested.store(true, Ordering::SeqCst);
    }

    pub fn login_requested(&self) -> bool {
        self.login_requested.load(Ordering::SeqCst)
    }

    /// Consume a pending login request
    pub fn take_login_request(&self) -> bool {
        self.login_requested.swap(false, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_session_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let store = SessionStore::open(&path);
        store
            .update(|d| {
                d.token = Some("abc".into());
                d.preview_url = Some("http://homepage:3000".into());
            })
            .unwrap();

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.snapshot().token.as_deref(), Some("abc"));
        assert_eq!(
            reopened.snapshot().preview_url.as_deref(),
            Some("http://homepage:3000")
        );
    }

    #[test]
    fn test_malformed_session_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "token = [").unwrap();
        assert_eq!(SessionStore::open(&path).snapshot(), SessionData::default());
    }

    #[test]
    fn test_request_login_clears_token() {
        let session = AuthSession::new(SessionStore::in_memory());
        session.set_token("t").unwrap();
        assert!(session.is_logged_in());

        session.request_login();
        assert!(!session.is_logged_in());
        assert!(session.take_login_request());
        assert!(!session.take_login_request());
    }

    #[test]
    fn test_claims_decoding() {
        let claims = TokenClaims::decode(&jwt(r#"{"sub":"admin","exp":1700000000}"#)).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("admin"));
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_000_000);
        assert!(claims.is_expired_at(Utc::now()));
        assert!(TokenClaims::decode("not-a-jwt").is_none());
    }
}
