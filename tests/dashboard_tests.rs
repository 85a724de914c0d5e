mod common;

use homepage_admin::client::{ApiResponse, Method};
use homepage_admin::errors::AdminError;
use homepage_admin::models::WidgetKind;
use homepage_admin::notify::ToastLevel;
use homepage_admin::reorder::DropEvent;
use serde_json::json;

use common::{MockBackend, body_json, dashboard, sample_configuration, serve_configuration};

fn service_names(dash: &homepage_admin::dashboard::Dashboard, category: &str) -> Vec<String> {
    dash.configuration()
        .services(category)
        .unwrap_or_default()
        .iter()
        .map(|s| s.name.clone())
        .collect()
}

#[tokio::test]
async fn test_load_keeps_category_and_service_order() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);

    assert!(dash.load_configuration().await);
    assert_eq!(dash.configuration().category_names(), vec!["Media", "Network"]);
    assert_eq!(service_names(&dash, "Media"), vec!["Jellyfin", "Sonarr", "Radarr"]);
    assert_eq!(dash.reorder().layout().services_of("Network"), ["Pi-hole", "Router"]);

    let request = &backend.requests()[0];
    assert_eq!(request.header_value("Authorization"), Some("Bearer test-token"));
}

#[tokio::test]
async fn test_failed_load_keeps_previous_state() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    backend.on_json(Method::Get, "/api/services/", 500, json!({"detail": "Disk full"}));
    assert!(!dash.load_configuration().await);
    assert_eq!(dash.configuration().category_count(), 2);
    assert_eq!(dash.notifier().latest().unwrap().message, "Disk full");
}

#[tokio::test]
async fn test_blank_required_widget_field_sends_nothing() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    let editor = dash.begin_add_service("Media");
    editor.name = "Emby".into();
    editor.href = "http://10.0.0.2:8920".into();
    editor.set_widget_kind(Some(WidgetKind::Emby));
    editor
        .widget_mut()
        .unwrap()
        .set_text("url", "http://10.0.0.2:8920")
        .unwrap();

    let err = dash.save_service().await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(ref msg) if msg.contains("API Key")));
    assert!(backend.requests().is_empty());
    // 表单保持打开
    assert!(dash.editor().is_some());
}

#[tokio::test]
async fn test_health_check_off_sends_disabled_marker() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    let editor = dash.begin_add_service("Network");
    editor.name = "NAS".into();
    editor.href = "http://10.0.0.5".into();
    editor.ping = "10.0.0.5".into();
    editor.set_health_check(false);

    dash.save_service().await.unwrap();
    let request = backend.find(Method::Post, "/api/services/").unwrap();
    let body = body_json(&request);
    assert_eq!(body["name"], "NAS");
    assert_eq!(body["category"], "Network");
    assert_eq!(body["config"]["healthCheckDisabled"], true);
    assert!(body["config"].get("ping").is_none());
    assert!(dash.editor().is_none());
    assert_eq!(
        dash.notifier().latest().unwrap().message,
        "Service added successfully"
    );
}

#[tokio::test]
async fn test_health_check_on_sends_fields() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    let editor = dash.begin_add_service("Network");
    editor.name = "NAS".into();
    editor.set_health_check(true);
    editor.server = "docker-host".into();
    editor.container = "nas".into();

    dash.save_service().await.unwrap();
    let body = body_json(&backend.find(Method::Post, "/api/services/").unwrap());
    assert_eq!(body["config"]["server"], "docker-host");
    assert_eq!(body["config"]["container"], "nas");
    assert!(body["config"].get("healthCheckDisabled").is_none());
}

#[tokio::test]
async fn test_edit_renames_via_original_path() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    backend.on_json(
        Method::Get,
        "/api/services/Network/Pi-hole",
        200,
        json!({
            "name": "Pi-hole",
            "category": "Network",
            "config": {
                "href": "http://10.0.0.3/admin",
                "ping": "10.0.0.3",
                "description": "DNS sinkhole",
                "siteMonitor": "http://10.0.0.3"
            }
        }),
    );
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    assert!(dash.begin_edit_service("Network", "Pi-hole").await);
    let editor = dash.editor_mut().unwrap();
    assert!(editor.health_check_enabled());
    editor.name = "Pi-hole DNS".into();

    dash.save_service().await.unwrap();
    let request = backend.find(Method::Put, "/api/services/Network/Pi-hole").unwrap();
    let body = body_json(&request);
    assert_eq!(body["name"], "Pi-hole DNS");
    assert_eq!(body["config"]["ping"], "10.0.0.3");
    // 未建模的键原样写回
    assert_eq!(body["config"]["description"], "DNS sinkhole");
    assert_eq!(body["config"]["siteMonitor"], "http://10.0.0.3");
}

#[tokio::test]
async fn test_customapi_mappings_keep_order() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    let editor = dash.begin_add_service("Media");
    editor.name = "Stats".into();
    editor.set_widget_kind(Some(WidgetKind::CustomApi));
    let widget = editor.widget_mut().unwrap();
    widget.set_text("url", "http://10.0.0.2:3003/api/v1/stats").unwrap();
    widget.add_mapping("uptime", "Uptime");
    widget.add_mapping("load", "Load");
    widget.add_mapping("users", "Users");

    dash.save_service().await.unwrap();
    let body = body_json(&backend.find(Method::Post, "/api/services/").unwrap());
    let widget = &body["config"]["widget"];
    assert_eq!(widget["type"], "customapi");
    assert_eq!(widget["method"], "GET");
    assert_eq!(
        widget["mappings"],
        json!([
            {"field": "uptime", "label": "Uptime"},
            {"field": "load", "label": "Load"},
            {"field": "users", "label": "Users"}
        ])
    );
}

#[tokio::test]
async fn test_homeassistant_fields_round_trip() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    backend.on_json(
        Method::Get,
        "/api/services/Media/Jellyfin",
        200,
        json!({
            "name": "Jellyfin",
            "category": "Media",
            "config": {
                "href": "http://10.0.0.2:8096",
                "widget": {
                    "type": "homeassistant",
                    "url": "http://10.0.0.2:8123",
                    "key": "token",
                    "fields": ["lights_on", "switches_on"]
                }
            }
        }),
    );
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    assert!(dash.begin_edit_service("Media", "Jellyfin").await);
    let editor = dash.editor().unwrap();
    assert_eq!(editor.widget_kind(), Some(WidgetKind::HomeAssistant));
    assert_eq!(
        editor.widget().unwrap().field("fields").unwrap().text(),
        "lights_on, switches_on"
    );

    dash.save_service().await.unwrap();
    let body = body_json(&backend.find(Method::Put, "/api/services/Media/Jellyfin").unwrap());
    assert_eq!(body["config"]["widget"]["fields"], json!(["lights_on", "switches_on"]));
    assert_eq!(body["config"]["widget"]["key"], "token");
}

#[tokio::test]
async fn test_unhide_clears_both_flags() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    backend.on_json(
        Method::Get,
        "/api/services/Network/Router",
        200,
        json!({
            "name": "Router",
            "category": "Network",
            "config": {"href": "http://10.0.0.1", "hidden": true, "healthCheckDisabled": true}
        }),
    );
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    assert!(dash.toggle_service_visibility("Network", "Router").await);
    let body = body_json(&backend.find(Method::Put, "/api/services/Network/Router").unwrap());
    assert!(body["config"].get("hidden").is_none());
    assert!(body["config"].get("healthCheckDisabled").is_none());
    assert_eq!(body["config"]["href"], "http://10.0.0.1");
    assert_eq!(
        dash.notifier().latest().unwrap().message,
        "Service shown successfully"
    );
}

#[tokio::test]
async fn test_names_are_percent_encoded() {
    let backend = MockBackend::new();
    serve_configuration(&backend, json!({"Home Lab": [{"name": "A/B", "config": {}}]}));
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    dash.delete_service("Home Lab", "A/B").await;
    dash.delete_category("Home Lab").await;
    assert_eq!(
        backend.writes(),
        vec![
            "DELETE /api/services/Home%20Lab/A%2FB",
            "DELETE /api/categories/Home%20Lab?force=true",
        ]
    );
}

#[tokio::test]
async fn test_category_crud_and_backend_detail() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    assert!(!dash.add_category("   ").await);
    assert!(!dash.rename_category("Media", "Media").await);
    assert!(backend.writes().is_empty());

    assert!(dash.add_category(" Tools ").await);
    assert_eq!(body_json(&backend.find(Method::Post, "/api/categories/").unwrap()), json!({"name": "Tools"}));

    assert!(dash.rename_category("Media", "Streaming").await);
    assert_eq!(
        body_json(&backend.find(Method::Put, "/api/categories/Media").unwrap()),
        json!({"new_name": "Streaming"})
    );

    backend.on_json(
        Method::Post,
        "/api/categories/",
        400,
        json!({"detail": "Category already exists"}),
    );
    assert!(!dash.add_category("Media").await);
    let toast = dash.notifier().latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Category already exists");
}

#[tokio::test]
async fn test_cross_category_drop_moves_then_reorders() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    let moved = dash
        .drop_item(DropEvent::Service {
            from_category: "Media".into(),
            from: 1,
            to_category: "Network".into(),
            to: 1,
        })
        .await;
    assert!(moved);
    assert_eq!(
        backend.writes(),
        vec!["POST /api/services/move", "POST /api/services/reorder"]
    );
    let requests = backend.requests();
    assert_eq!(
        body_json(&requests[0]),
        json!({"service_name": "Sonarr", "from_category": "Media", "to_category": "Network"})
    );
    assert_eq!(
        body_json(&requests[1]),
        json!({"category": "Network", "service_order": ["Pi-hole", "Sonarr", "Router"]})
    );
    // 成功后本地状态直接按新布局排列，不再请求
    assert_eq!(service_names(&dash, "Media"), vec!["Jellyfin", "Radarr"]);
    assert_eq!(service_names(&dash, "Network"), vec!["Pi-hole", "Sonarr", "Router"]);
    assert_eq!(
        dash.notifier().latest().unwrap().message,
        "Moved \"Sonarr\" to \"Network\""
    );
}

#[tokio::test]
async fn test_failed_reorder_reloads_server_order() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    backend.on_json(
        Method::Post,
        "/api/categories/reorder",
        500,
        json!({"detail": "Write failed"}),
    );
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    let ok = dash.drop_item(DropEvent::Category { from: 0, to: 1 }).await;
    assert!(!ok);
    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(common::path_of(&requests[1]), "/api/services/");
    assert_eq!(dash.configuration().category_names(), vec!["Media", "Network"]);
    assert_eq!(dash.reorder().layout().categories(), ["Media", "Network"]);
    assert_eq!(dash.notifier().latest().unwrap().message, "Write failed");
}

#[tokio::test]
async fn test_failed_reorder_and_failed_reload_keep_layout_in_sync() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    backend.on_json(Method::Post, "/api/categories/reorder", 500, json!({"detail": "Write failed"}));
    backend.on_json(Method::Get, "/api/services/", 503, json!({"detail": "Unavailable"}));
    assert!(!dash.drop_item(DropEvent::Category { from: 0, to: 1 }).await);

    assert_eq!(dash.configuration().category_names(), vec!["Media", "Network"]);
    assert_eq!(dash.reorder().layout().categories(), ["Media", "Network"]);
}

#[tokio::test]
async fn test_drop_after_failed_move_and_reload_targets_rendered_service() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    backend.on_json(Method::Post, "/api/services/move", 500, json!({"detail": "Write failed"}));
    backend.on_json(Method::Get, "/api/services/", 503, json!({"detail": "Unavailable"}));
    let jellyfin = DropEvent::Service {
        from_category: "Media".into(),
        from: 0,
        to_category: "Network".into(),
        to: 0,
    };
    assert!(!dash.drop_item(jellyfin).await);
    assert_eq!(dash.reorder().layout().services_of("Media"), ["Jellyfin", "Sonarr", "Radarr"]);

    // 后端恢复后，按显示位置拖动 Media[1]
    backend.on_json(Method::Post, "/api/services/move", 200, json!({"message": "ok"}));
    serve_configuration(&backend, sample_configuration());
    backend.clear();
    let rendered = service_names(&dash, "Media");
    assert!(
        dash.drop_item(DropEvent::Service {
            from_category: "Media".into(),
            from: 1,
            to_category: "Network".into(),
            to: 0,
        })
        .await
    );
    let moved = backend.find(Method::Post, "/api/services/move").unwrap();
    assert_eq!(body_json(&moved)["service_name"], json!(rendered[1]));
    assert_eq!(rendered[1], "Sonarr");
}

#[tokio::test]
async fn test_cross_category_drop_reloads_when_destination_reorder_fails() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    // 移动已生效，但目标分类的排序没有保存
    serve_configuration(
        &backend,
        json!({
            "Media": [
                {"name": "Jellyfin", "config": {}},
                {"name": "Radarr", "config": {}}
            ],
            "Network": [
                {"name": "Pi-hole", "config": {}},
                {"name": "Router", "config": {}},
                {"name": "Sonarr", "config": {}}
            ]
        }),
    );
    backend.on_json(Method::Post, "/api/services/reorder", 500, json!({"detail": "Write failed"}));

    let ok = dash
        .drop_item(DropEvent::Service {
            from_category: "Media".into(),
            from: 1,
            to_category: "Network".into(),
            to: 0,
        })
        .await;
    assert!(!ok);

    let calls: Vec<String> = backend
        .requests()
        .iter()
        .map(|r| format!("{} {}", r.method, common::path_of(r)))
        .collect();
    assert_eq!(
        calls,
        vec![
            "POST /api/services/move",
            "POST /api/services/reorder",
            "GET /api/services/"
        ]
    );
    assert_eq!(service_names(&dash, "Media"), vec!["Jellyfin", "Radarr"]);
    assert_eq!(service_names(&dash, "Network"), vec!["Pi-hole", "Router", "Sonarr"]);
    assert_eq!(dash.reorder().layout().services_of("Media"), ["Jellyfin", "Radarr"]);
    assert_eq!(
        dash.reorder().layout().services_of("Network"),
        ["Pi-hole", "Router", "Sonarr"]
    );
    assert_eq!(dash.notifier().latest().unwrap().message, "Write failed");
}

#[tokio::test]
async fn test_drop_ignored_when_drag_disabled_or_unmoved() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    assert!(!dash.drop_item(DropEvent::Category { from: 1, to: 1 }).await);
    dash.set_drag_enabled(false);
    assert!(!dash.drop_item(DropEvent::Category { from: 0, to: 1 }).await);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_set_category_order_requires_permutation() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    assert!(!dash.set_category_order(vec!["Network".into()]).await);
    assert!(
        !dash
            .set_category_order(vec!["Network".into(), "Media".into(), "Extra".into()])
            .await
    );
    assert!(backend.requests().is_empty());

    assert!(
        dash.set_category_order(vec!["Network".into(), "Media".into()])
            .await
    );
    assert_eq!(
        body_json(&backend.find(Method::Post, "/api/categories/reorder").unwrap()),
        json!(["Network", "Media"])
    );
    assert_eq!(dash.configuration().category_names(), vec!["Network", "Media"]);
}

#[tokio::test]
async fn test_set_service_order_unknown_category() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;
    backend.clear();

    assert!(!dash.set_service_order("Nope", vec![]).await);
    assert!(
        dash.set_service_order(
            "Media",
            vec!["Radarr".into(), "Jellyfin".into(), "Sonarr".into()]
        )
        .await
    );
    assert_eq!(backend.writes(), vec!["POST /api/services/reorder"]);
    assert_eq!(service_names(&dash, "Media"), vec!["Radarr", "Jellyfin", "Sonarr"]);
}

#[tokio::test]
async fn test_unauthorized_requests_login_without_toast() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    let mut dash = dashboard(&backend);
    dash.load_configuration().await;

    backend.on_json(Method::Delete, "/api/services/Media/Sonarr", 401, json!({"detail": "Token expired"}));
    assert!(!dash.delete_service("Media", "Sonarr").await);
    assert!(!dash.client().session().is_logged_in());
    assert!(dash.client().session().take_login_request());
    assert_ne!(dash.notifier().latest().map(|t| t.level), Some(ToastLevel::Error));
}

#[tokio::test]
async fn test_export_and_import_configuration() {
    let backend = MockBackend::new();
    serve_configuration(&backend, sample_configuration());
    backend.on(
        Method::Get,
        "/api/config/export",
        ApiResponse::new(200, "Media:\n  - Jellyfin:\n      href: http://10.0.0.2:8096\n"),
    );
    backend.on_json(
        Method::Post,
        "/api/config/import",
        200,
        json!({"message": "ok", "categories": 2, "services": 5}),
    );
    let mut dash = dashboard(&backend);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("services.yaml");

    let written = dash.export_configuration(&target).await.unwrap();
    assert_eq!(written, target);
    let content = std::fs::read_to_string(&target).unwrap();
    assert!(content.starts_with("Media:"));

    assert!(dash.import_configuration(&target).await);
    let upload = backend.find(Method::Post, "/api/config/import").unwrap();
    assert!(
        upload
            .header_value("Content-Type")
            .unwrap()
            .starts_with("multipart/form-data; boundary=")
    );
    let body = String::from_utf8_lossy(upload.body.as_deref().unwrap()).into_owned();
    assert!(body.contains("filename=\"services.yaml\""));
    assert!(body.contains("Jellyfin"));
    assert_eq!(
        dash.notifier().latest().unwrap().message,
        "Configuration imported successfully! 2 categories, 5 services"
    );
    assert_eq!(dash.configuration().category_count(), 2);
}

#[tokio::test]
async fn test_import_missing_file_sends_nothing() {
    let backend = MockBackend::new();
    let mut dash = dashboard(&backend);
    let dir = tempfile::tempdir().unwrap();

    assert!(!dash.import_configuration(&dir.path().join("missing.yaml")).await);
    assert!(backend.requests().is_empty());
    assert_eq!(dash.notifier().latest().unwrap().level, ToastLevel::Error);
}
