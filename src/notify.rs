//! Transient status messages
//!
//! Every toast is mirrored to `tracing`, so CLI runs and TUI log files carry
//! the same history the user saw on screen.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

const MAX_TOASTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

#[derive(Debug)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    /// Notifier using `notifications.ttl_secs`
    pub fn from_config() -> Self {
        let ttl = crate::config::get_config().notifications.ttl_secs;
        Self::new(Duration::from_secs(ttl))
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match level {
            ToastLevel::Info | ToastLevel::Success => info!("{}", message),
            ToastLevel::Warning => warn!("{}", message),
            ToastLevel::Error => error!("{}", message),
        }
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            level,
            message,
            created_at: now,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < ttl);
    }

    /// Toasts still within their TTL, oldest first
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active_at(Instant::now())
    }

    pub fn active_at(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        let ttl = self.ttl;
        self.toasts
            .iter()
            .filter(move |t| now.saturating_duration_since(t.created_at) < ttl)
    }

    /// Most recent toast regardless of expiry
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Remove and return everything queued, used by the CLI to print once
    pub fn drain(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_ttl() {
        let mut notifier = Notifier::new(Duration::from_secs(4));
        let start = Instant::now();
        notifier.push_at(ToastLevel::Success, "Category added", start);
        notifier.push_at(ToastLevel::Error, "Failed", start + Duration::from_secs(3));

        assert_eq!(notifier.active_at(start + Duration::from_secs(1)).count(), 2);
        assert_eq!(notifier.active_at(start + Duration::from_secs(5)).count(), 1);

        notifier.prune_at(start + Duration::from_secs(8));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_latest_and_drain() {
        let mut notifier = Notifier::new(Duration::from_secs(4));
        notifier.info("one");
        notifier.warning("two");
        assert_eq!(notifier.latest().unwrap().message, "two");
        assert_eq!(notifier.latest().unwrap().level, ToastLevel::Warning);
        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert!(notifier.latest().is_none());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut notifier = Notifier::new(Duration::from_secs(60));
        for i in 0..(MAX_TOASTS + 5) {
            notifier.info(format!("toast {}", i));
        }
        assert_eq!(notifier.drain().len(), MAX_TOASTS);
    }
}
