use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 默认配置文件名（当前工作目录）
pub const CONFIG_FILE_NAME: &str = "homepage-admin.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - api: 后端地址与请求超时
/// - session: 会话状态文件（token、预览地址）
/// - notifications: 提示消息显示时长
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > homepage-admin.toml > 默认值
    /// ENV 前缀：HPA，分隔符：__
    /// 示例：HPA__API__BASE_URL=http://10.0.0.5:8000
    pub fn load() -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                Environment::with_prefix("HPA")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 会话状态文件的实际路径
    pub fn state_file(&self) -> PathBuf {
        match self.session.state_file.as_deref() {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_state_dir().join("session.toml"),
        }
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// 空值表示使用 `<config_dir>/homepage-admin/session.toml`
    #[serde(default)]
    pub state_file: Option<String>,
}

/// 提示消息配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_ttl")]
    pub ttl_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_toast_ttl() -> u64 {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

/// `<config_dir>/homepage-admin`，无法解析时退回当前目录下的 `.homepage-admin`
pub fn default_state_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("homepage-admin"))
        .unwrap_or_else(|| PathBuf::from(".homepage-admin"))
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_toast_ttl(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.notifications.ttl_secs, 4);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_state_file_override() {
        let mut config = StaticConfig::default();
        config.session.state_file = Some("/tmp/hpa/session.toml".to_string());
        assert_eq!(config.state_file(), PathBuf::from("/tmp/hpa/session.toml"));

        config.session.state_file = Some(String::new());
        assert!(config.state_file().ends_with("session.toml"));
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[api]"));
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.api.base_url, StaticConfig::default().api.base_url);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: StaticConfig = toml::from_str("[api]\nbase_url = \"http://nas:8000\"\n").unwrap();
        assert_eq!(parsed.api.base_url, "http://nas:8000");
        assert_eq!(parsed.api.timeout_secs, 10);
        assert_eq!(parsed.logging.format, "text");
    }
}
