use std::fmt;

#[derive(Debug, Clone)]
pub enum AdminError {
    /// Network or transport failure, the request never produced a response
    Transport(String),
    /// 401 from the backend; the session has already been cleared
    Unauthorized(String),
    /// Non-2xx response carrying the backend's `detail` (if any)
    Rejected { status: u16, detail: Option<String> },
    Validation(String),
    NotFound(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
}

impl AdminError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AdminError::Transport(_) => "E001",
            AdminError::Unauthorized(_) => "E002",
            AdminError::Rejected { .. } => "E003",
            AdminError::Validation(_) => "E004",
            AdminError::NotFound(_) => "E005",
            AdminError::FileOperation(_) => "E006",
            AdminError::Serialization(_) => "E007",
            AdminError::Config(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AdminError::Transport(_) => "Network Error",
            AdminError::Unauthorized(_) => "Authentication Required",
            AdminError::Rejected { .. } => "Request Rejected",
            AdminError::Validation(_) => "Validation Error",
            AdminError::NotFound(_) => "Resource Not Found",
            AdminError::FileOperation(_) => "File Operation Error",
            AdminError::Serialization(_) => "Serialization Error",
            AdminError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            AdminError::Transport(msg)
            | AdminError::Unauthorized(msg)
            | AdminError::Validation(msg)
            | AdminError::NotFound(msg)
            | AdminError::FileOperation(msg)
            | AdminError::Serialization(msg)
            | AdminError::Config(msg) => msg.clone(),
            AdminError::Rejected { status, detail } => match detail {
                Some(detail) => detail.clone(),
                None => format!("HTTP {}", status),
            },
        }
    }

    /// Message to surface to the user: backend `detail` verbatim, else `fallback`.
    ///
    /// Local validation and file errors carry their own text and win over the
    /// fallback as well.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AdminError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AdminError::Validation(msg) | AdminError::FileOperation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AdminError::Unauthorized(_))
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏与日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AdminError {}

// 便捷的构造函数
impl AdminError {
    pub fn transport<T: Into<String>>(msg: T) -> Self {
        AdminError::Transport(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        AdminError::Unauthorized(msg.into())
    }

    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        AdminError::Rejected { status, detail }
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AdminError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AdminError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        AdminError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AdminError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        AdminError::Config(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AdminError {
    fn from(err: toml::de::Error) -> Self {
        AdminError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for AdminError {
    fn from(err: toml::ser::Error) -> Self {
        AdminError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_prefers_detail() {
        let err = AdminError::rejected(400, Some("Category already exists".into()));
        assert_eq!(err.message(), "Category already exists");
        assert_eq!(err.user_message("Failed to add category"), "Category already exists");
    }

    #[test]
    fn test_rejected_without_detail_uses_fallback() {
        let err = AdminError::rejected(500, None);
        assert_eq!(err.message(), "HTTP 500");
        assert_eq!(err.user_message("Failed to add category"), "Failed to add category");
    }

    #[test]
    fn test_transport_error_uses_fallback() {
        let err = AdminError::transport("connection refused");
        assert_eq!(err.user_message("Failed to load configuration"), "Failed to load configuration");
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_format_simple() {
        let err = AdminError::validation("Service name is required");
        assert_eq!(err.format_simple(), "Validation Error: Service name is required");
        assert_eq!(format!("{}", err), err.format_simple());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let err: AdminError = io.into();
        assert!(matches!(err, AdminError::FileOperation(_)));
        assert!(err.message().contains("missing.yaml"));
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(AdminError::unauthorized("expired").is_unauthorized());
        assert!(!AdminError::not_found("x").is_unauthorized());
    }
}
