use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when
/// [`init_config`] has not run (library use, tests).
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `.env`, then `homepage-admin.toml` from the current directory and
/// `HPA__*` environment overrides. Later calls are no-ops.
///
/// # Examples
/// ```no_run
/// use homepage_admin::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    dotenvy::dotenv().ok();
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()));
}

/// Replace `api.base_url` (used by the `--api` command-line flag).
pub fn override_api_base_url(base_url: &str) {
    let current = get_config();
    let mut updated = (*current).clone();
    updated.api.base_url = base_url.trim_end_matches('/').to_string();
    if let Some(config) = CONFIG.get() {
        config.store(Arc::new(updated));
    }
}
