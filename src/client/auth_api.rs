use tracing::{info, warn};

use super::ApiClient;
use crate::errors::{AdminError, Result};
use crate::models::{LoginRequest, LoginResponse, MessageResponse, UserInfo};

/// `/api/auth/*`. Token state lives in the client's [`super::AuthSession`].
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and store it
    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AdminError::validation("Username and password are required"));
        }
        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/api/auth/login", &request).await?;
        self.client.session().set_token(&response.access_token)?;
        info!("Logged in as {}", request.username);
        Ok(UserInfo {
            username: request.username,
        })
    }

    /// Check the stored token. Without a token, or when the backend refuses
    /// it, the session is cleared and a login is requested.
    pub async fn verify(&self) -> Result<UserInfo> {
        let session = self.client.session();
        if session.token().is_none() {
            session.request_login();
            return Err(AdminError::unauthorized("Not logged in"));
        }
        match self.client.get::<UserInfo>("/api/auth/verify").await {
            Ok(user) => Ok(user),
            Err(e) => {
                warn!("Session verification failed: {}", e);
                session.request_login();
                Err(match e {
                    AdminError::Unauthorized(_) => e,
                    other => AdminError::unauthorized(other.message()),
                })
            }
        }
    }

    /// Best-effort server notification; the local session is always cleared
    pub async fn logout(&self) {
        let session = self.client.session();
        if session.token().is_some()
            && let Err(e) = self
                .client
                .post_empty::<MessageResponse>("/api/auth/logout")
                .await
        {
            warn!("Logout notification failed: {}", e);
        }
        session.request_login();
        info!("Logged out");
    }
}
