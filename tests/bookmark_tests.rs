mod common;

use std::time::Duration;

use homepage_admin::client::{ApiResponse, Method};
use homepage_admin::errors::AdminError;
use homepage_admin::notify::{Notifier, ToastLevel};
use serde_json::json;

use common::{MockBackend, body_json, bookmark_manager};

fn notifier() -> Notifier {
    Notifier::new(Duration::from_secs(60))
}

fn serve_bookmarks(backend: &MockBackend) {
    backend.on_json(
        Method::Get,
        "/api/bookmarks/",
        200,
        json!([
            {"name": "Developer", "bookmarks": [
                {"name": "GitHub", "href": "https://github.com", "icon": "github.png"},
                {"name": "Docs", "href": "https://docs.rs", "description": "Crate docs"}
            ]},
            {"name": "Social", "bookmarks": []}
        ]),
    );
}

#[tokio::test]
async fn test_load_groups_in_order() {
    let backend = MockBackend::new();
    serve_bookmarks(&backend);
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    assert!(manager.load(&mut notifier).await);
    let names: Vec<&str> = manager.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Developer", "Social"]);
    assert_eq!(manager.total_bookmarks(), 2);
    assert_eq!(
        manager.group("Developer").unwrap().find("Docs").unwrap().description.as_deref(),
        Some("Crate docs")
    );
}

#[tokio::test]
async fn test_add_bookmark_sends_nulls_for_blank_optionals() {
    let backend = MockBackend::new();
    serve_bookmarks(&backend);
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    let editor = manager.begin_add("Dev Ops");
    editor.name = "Grafana".into();
    editor.href = "http://10.0.0.4:3000".into();

    manager.save(&mut notifier).await.unwrap();
    let request = backend.find(Method::Post, "/api/bookmarks/Dev%20Ops").unwrap();
    assert_eq!(
        body_json(&request),
        json!({"name": "Grafana", "href": "http://10.0.0.4:3000", "icon": null, "description": null})
    );
    assert!(manager.editor().is_none());
    assert_eq!(notifier.latest().unwrap().message, "Bookmark added successfully");
}

#[tokio::test]
async fn test_invalid_bookmark_is_not_sent() {
    let backend = MockBackend::new();
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    let editor = manager.begin_add("Developer");
    editor.name = "Broken".into();
    editor.href = "ftp://files".into();

    let err = manager.save(&mut notifier).await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
    assert!(backend.requests().is_empty());
    assert!(notifier.is_empty());
    assert!(manager.editor().is_some());
}

#[tokio::test]
async fn test_edit_bookmark_uses_original_name() {
    let backend = MockBackend::new();
    serve_bookmarks(&backend);
    backend.on_json(
        Method::Get,
        "/api/bookmarks/Developer",
        200,
        json!({"group": "Developer", "bookmarks": [
            {"name": "GitHub", "href": "https://github.com", "icon": "github.png"}
        ]}),
    );
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    assert!(manager.begin_edit("Developer", "GitHub", &mut notifier).await);
    let editor = manager.editor_mut().unwrap();
    assert!(editor.is_edit());
    assert_eq!(editor.icon, "github.png");
    editor.name = "GitHub Enterprise".into();

    manager.save(&mut notifier).await.unwrap();
    let request = backend.find(Method::Put, "/api/bookmarks/Developer/GitHub").unwrap();
    assert_eq!(body_json(&request)["name"], "GitHub Enterprise");
    assert_eq!(body_json(&request)["icon"], "github.png");
}

#[tokio::test]
async fn test_edit_missing_bookmark() {
    let backend = MockBackend::new();
    backend.on_json(
        Method::Get,
        "/api/bookmarks/Developer",
        200,
        json!({"group": "Developer", "bookmarks": []}),
    );
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    assert!(!manager.begin_edit("Developer", "Gone", &mut notifier).await);
    assert!(manager.editor().is_none());
    assert_eq!(notifier.latest().unwrap().message, "Bookmark not found");
}

#[tokio::test]
async fn test_group_admin_paths() {
    let backend = MockBackend::new();
    serve_bookmarks(&backend);
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    assert!(!manager.create_group("  ", &mut notifier).await);
    assert!(manager.create_group("Media/TV", &mut notifier).await);
    assert!(manager.rename_group("Social", "Friends", &mut notifier).await);
    assert!(manager.delete_group("Friends", &mut notifier).await);
    assert!(manager.delete_bookmark("Developer", "Docs", &mut notifier).await);

    assert_eq!(
        backend.writes(),
        vec![
            "POST /api/bookmarks/groups/Media%2FTV",
            "PUT /api/bookmarks/groups/Social",
            "DELETE /api/bookmarks/groups/Friends",
            "DELETE /api/bookmarks/Developer/Docs",
        ]
    );
    assert_eq!(
        body_json(&backend.find(Method::Put, "/api/bookmarks/groups/Social").unwrap()),
        json!({"new_name": "Friends"})
    );
}

#[tokio::test]
async fn test_backend_detail_is_surfaced() {
    let backend = MockBackend::new();
    backend.on_json(
        Method::Post,
        "/api/bookmarks/groups/Social",
        400,
        json!({"detail": "Group 'Social' already exists"}),
    );
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    assert!(!manager.create_group("Social", &mut notifier).await);
    let toast = notifier.latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Group 'Social' already exists");
}

#[tokio::test]
async fn test_unauthorized_load_asks_for_login() {
    let backend = MockBackend::new();
    backend.on_json(Method::Get, "/api/bookmarks/", 401, json!({"detail": "Not authenticated"}));
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();

    assert!(!manager.load(&mut notifier).await);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn test_export_then_import() {
    let backend = MockBackend::new();
    serve_bookmarks(&backend);
    backend.on(
        Method::Get,
        "/api/bookmarks/export",
        ApiResponse::new(200, "- Developer:\n    - GitHub:\n        - href: https://github.com\n"),
    );
    backend.on_json(
        Method::Post,
        "/api/bookmarks/import",
        200,
        json!({"message": "ok", "groups": 1, "total_bookmarks": 1}),
    );
    let mut manager = bookmark_manager(&backend);
    let mut notifier = notifier();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("my-bookmarks.yaml");

    assert_eq!(manager.export(&path, &mut notifier).await, Some(path.clone()));
    assert!(std::fs::read_to_string(&path).unwrap().contains("GitHub"));

    assert!(manager.import(&path, &mut notifier).await);
    let upload = backend.find(Method::Post, "/api/bookmarks/import").unwrap();
    let body = String::from_utf8_lossy(upload.body.as_deref().unwrap()).into_owned();
    assert!(body.contains("filename=\"my-bookmarks.yaml\""));
    assert_eq!(
        notifier.latest().unwrap().message,
        "Imported 1 groups with 1 bookmarks"
    );
    assert_eq!(manager.groups().len(), 2);
}
