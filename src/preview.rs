//! Live preview of the rendered Homepage
//!
//! The target URL is kept in the session store. The "frame" is the URL the
//! UI should currently display; refreshing appends a `_t=<millis>` cache
//! buster so a browser or proxy cannot serve a stale page.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::client::{ApiRequest, AuthSession, HttpTransport, Method};
use crate::notify::Notifier;
use crate::utils::url_validator::{append_query_param, parse_http_url};

pub const LOAD_OK: &str = "Homepage loaded successfully";
pub const LOAD_FAILED: &str = "Failed to load Homepage. Check if the URL is correct and accessible.";

#[derive(Debug)]
pub struct LivePreview {
    session: Arc<AuthSession>,
    url: Option<String>,
    frame_src: Option<String>,
    visible: bool,
    fullscreen: bool,
}

impl LivePreview {
    /// Restore the stored URL, if any, into the frame
    pub fn new(session: Arc<AuthSession>) -> Self {
        let url = session
            .store()
            .snapshot()
            .preview_url
            .filter(|u| parse_http_url(u).is_ok());
        Self {
            session,
            frame_src: url.clone(),
            url,
            visible: true,
            fullscreen: false,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn frame_src(&self) -> Option<&str> {
        self.frame_src.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn persist(&self) {
        let url = self.url.clone();
        if let Err(e) = self.session.store().update(|data| data.preview_url = url) {
            warn!("Failed to persist preview URL: {}", e);
        }
    }

    /// Validate and store a new target. Returns whether it was accepted.
    pub fn set_url(&mut self, raw: &str, notifier: &mut Notifier) -> bool {
        let raw = raw.trim();
        if raw.is_empty() {
            notifier.warning("Please enter a Homepage URL");
            return false;
        }
        if let Err(e) = parse_http_url(raw) {
            debug!("Rejected preview URL {}: {}", raw, e);
            notifier.error("Please enter a valid URL");
            return false;
        }
        self.url = Some(raw.to_string());
        self.frame_src = Some(raw.to_string());
        self.persist();
        true
    }

    /// Reload the frame with a cache buster
    pub fn refresh(&mut self, now: DateTime<Utc>, notifier: &mut Notifier) -> Option<&str> {
        if self.url.is_none() {
            notifier.warning("Please set a Homepage URL first");
            return None;
        }
        self.refresh_if_configured(now)
    }

    /// Refresh only when a URL is set; silent otherwise
    pub fn refresh_if_configured(&mut self, now: DateTime<Utc>) -> Option<&str> {
        let url = self.url.as_deref()?;
        let src = append_query_param(url, "_t", &now.timestamp_millis().to_string());
        debug!("Preview refreshed: {}", src);
        self.frame_src = Some(src);
        self.frame_src.as_deref()
    }

    /// Show/hide the preview pane; showing it refreshes
    pub fn toggle_visible(&mut self, now: DateTime<Utc>, notifier: &mut Notifier) -> bool {
        self.visible = !self.visible;
        if self.visible {
            self.refresh(now, notifier);
        } else {
            self.fullscreen = false;
        }
        self.visible
    }

    /// Fullscreen needs something to show
    pub fn toggle_fullscreen(&mut self) -> bool {
        if self.frame_src.is_none() {
            self.fullscreen = false;
        } else {
            self.fullscreen = !self.fullscreen;
        }
        self.fullscreen
    }

    pub fn clear(&mut self, notifier: &mut Notifier) {
        self.url = None;
        self.frame_src = None;
        self.fullscreen = false;
        self.persist();
        notifier.info("Homepage URL cleared");
    }

    /// Fetch the frame source and report whether Homepage answered
    pub async fn probe(&self, transport: &dyn HttpTransport, notifier: &mut Notifier) -> bool {
        let Some(src) = self.frame_src.clone() else {
            notifier.warning("Please set a Homepage URL first");
            return false;
        };
        match transport.send(ApiRequest::new(Method::Get, src)).await {
            Ok(response) if response.is_success() => {
                notifier.success(LOAD_OK);
                true
            }
            Ok(response) => {
                warn!("Preview target answered {}", response.status);
                notifier.error(LOAD_FAILED);
                false
            }
            Err(e) => {
                warn!("Preview target unreachable: {}", e);
                notifier.error(LOAD_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SessionStore;
    use std::time::Duration;

    fn preview() -> (LivePreview, Notifier) {
        let session = Arc::new(AuthSession::new(SessionStore::in_memory()));
        (
            LivePreview::new(session),
            Notifier::new(Duration::from_secs(60)),
        )
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_set_url_validation() {
        let (mut preview, mut notifier) = preview();
        assert!(!preview.set_url("   ", &mut notifier));
        assert_eq!(notifier.latest().unwrap().message, "Please enter a Homepage URL");
        assert!(!preview.set_url("homepage", &mut notifier));
        assert_eq!(notifier.latest().unwrap().message, "Please enter a valid URL");

        assert!(preview.set_url(" http://homepage:3000 ", &mut notifier));
        assert_eq!(preview.url(), Some("http://homepage:3000"));
        assert_eq!(preview.frame_src(), Some("http://homepage:3000"));
    }

    #[test]
    fn test_refresh_cache_buster() {
        let (mut preview, mut notifier) = preview();
        assert!(preview.refresh(at(1), &mut notifier).is_none());
        assert_eq!(notifier.latest().unwrap().message, "Please set a Homepage URL first");

        preview.set_url("http://h:3000/?tab=a", &mut notifier);
        assert_eq!(
            preview.refresh(at(1_700_000_000_123), &mut notifier),
            Some("http://h:3000/?tab=a&_t=1700000000123")
        );
    }

    #[test]
    fn test_url_survives_restart() {
        let session = Arc::new(AuthSession::new(SessionStore::in_memory()));
        let mut notifier = Notifier::new(Duration::from_secs(60));
        let mut first = LivePreview::new(session.clone());
        first.set_url("http://h:3000", &mut notifier);

        let second = LivePreview::new(session);
        assert_eq!(second.frame_src(), Some("http://h:3000"));
    }

    #[test]
    fn test_visibility_and_fullscreen() {
        let (mut preview, mut notifier) = preview();
        assert!(!preview.toggle_fullscreen());

        preview.set_url("http://h:3000", &mut notifier);
        assert!(preview.toggle_fullscreen());
        assert!(!preview.toggle_visible(at(5), &mut notifier));
        assert!(!preview.is_fullscreen());
        assert!(preview.toggle_visible(at(5), &mut notifier));
        assert_eq!(preview.frame_src(), Some("http://h:3000?_t=5"));
    }

    #[test]
    fn test_clear() {
        let (mut preview, mut notifier) = preview();
        preview.set_url("http://h:3000", &mut notifier);
        preview.clear(&mut notifier);
        assert!(preview.url().is_none());
        assert!(preview.frame_src().is_none());
        assert_eq!(notifier.latest().unwrap().message, "Homepage URL cleared");
    }
}
