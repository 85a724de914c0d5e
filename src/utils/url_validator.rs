//! URL 校验
//!
//! Service links, widget endpoints and the preview target must all be
//! absolute http(s) URLs with a host.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    UnsupportedScheme(String),
    MissingHost,
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme '{}': only http:// and https:// are allowed",
                scheme
            ),
            Self::MissingHost => write!(f, "URL has no host"),
            Self::Malformed(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Parse `raw` (trimmed) as an absolute http(s) URL
pub fn parse_http_url(raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;
    // url 会把 scheme 规范化为小写
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }
    Ok(url)
}

pub fn is_http_url(raw: &str) -> bool {
    parse_http_url(raw).is_ok()
}

/// Append `key=value` to the query string, using `?` or `&` as needed
pub fn append_query_param(base: &str, key: &str, value: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", base, separator, key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_http_url("http://10.0.0.2:8096"));
        assert!(is_http_url("https://homepage.lan/path?x=1"));
        assert!(is_http_url("  HTTP://LOCALHOST:3000  "));
    }

    #[test]
    fn test_rejects_other_inputs() {
        assert_eq!(parse_http_url("   "), Err(UrlValidationError::Empty));
        assert!(matches!(
            parse_http_url("ftp://files.lan"),
            Err(UrlValidationError::UnsupportedScheme(s)) if s == "ftp"
        ));
        assert!(matches!(
            parse_http_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            parse_http_url("homepage.lan"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_append_query_param() {
        assert_eq!(
            append_query_param("http://h:3000", "_t", "5"),
            "http://h:3000?_t=5"
        );
        assert_eq!(
            append_query_param("http://h:3000/?tab=1", "_t", "5"),
            "http://h:3000/?tab=1&_t=5"
        );
    }
}
