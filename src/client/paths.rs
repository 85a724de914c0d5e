//! Request path helpers. Names typed by users (categories, services, groups,
//! bookmarks) may contain `/`, `?`, `#` or spaces and are always encoded.

/// Percent-encode one path segment
pub fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// `/api/services/{category}/{name}`
pub fn service(category: &str, name: &str) -> String {
    format!("/api/services/{}/{}", segment(category), segment(name))
}

pub fn category(name: &str) -> String {
    format!("/api/categories/{}", segment(name))
}

pub fn bookmark_group(group: &str) -> String {
    format!("/api/bookmarks/{}", segment(group))
}

pub fn bookmark(group: &str, name: &str) -> String {
    format!("/api/bookmarks/{}/{}", segment(group), segment(name))
}

pub fn group_admin(group: &str) -> String {
    format!("/api/bookmarks/groups/{}", segment(group))
}
