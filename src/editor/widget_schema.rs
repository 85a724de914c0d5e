//! Declarative widget form table: widget type → field descriptors

use crate::models::WidgetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Url,
    Text,
    Password,
    Checkbox,
    Select(&'static [&'static str]),
    /// Comma-delimited list of strings
    List,
    /// Repeatable `{field, label}` pairs
    Mappings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Initial value of a freshly built field (`"true"`/`"false"` for checkboxes)
    pub default: Option<&'static str>,
    pub placeholder: &'static str,
}

const fn field(
    key: &'static str,
    label: &'static str,
    kind: FieldKind,
    required: bool,
    placeholder: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        key,
        label,
        kind,
        required,
        default: None,
        placeholder,
    }
}

const fn with_default(mut descriptor: FieldDescriptor, default: &'static str) -> FieldDescriptor {
    descriptor.default = Some(default);
    descriptor
}

pub const HTTP_METHODS: &[&str] = &["GET", "POST"];

const MEDIA_SERVER: &[FieldDescriptor] = &[
    field("url", "API URL", FieldKind::Url, true, "http://10.0.0.2:8096"),
    field("key", "API Key", FieldKind::Text, true, ""),
    with_default(
        field("enableBlocks", "Enable Blocks", FieldKind::Checkbox, false, ""),
        "false",
    ),
    with_default(
        field("enableNowPlaying", "Enable Now Playing", FieldKind::Checkbox, false, ""),
        "true",
    ),
];

const TORRENT_CLIENT: &[FieldDescriptor] = &[
    field("url", "API URL", FieldKind::Url, true, "http://10.0.0.2:8889"),
    field("username", "Username", FieldKind::Text, true, ""),
    field("password", "Password", FieldKind::Password, true, ""),
];

const CUSTOM_API: &[FieldDescriptor] = &[
    field("url", "API URL", FieldKind::Url, true, "http://10.0.0.2:3003/api/v1/..."),
    with_default(
        field("method", "HTTP Method", FieldKind::Select(HTTP_METHODS), true, ""),
        "GET",
    ),
    field("mappings", "Field Mappings", FieldKind::Mappings, false, ""),
];

const HOME_ASSISTANT: &[FieldDescriptor] = &[
    field("url", "API URL", FieldKind::Url, true, "http://10.0.0.2:8123"),
    field("key", "Access Token", FieldKind::Text, true, ""),
    field(
        "fields",
        "Fields (comma-separated)",
        FieldKind::List,
        false,
        "lights_on, switches_on",
    ),
];

const DISK_STATION: &[FieldDescriptor] = &[
    field("url", "API URL", FieldKind::Url, true, "http://10.0.0.3:5000"),
    field("username", "Username", FieldKind::Text, true, ""),
    field("password", "Password", FieldKind::Password, true, ""),
    field("volume", "Volume", FieldKind::Text, false, "volume_1"),
];

const TAILSCALE: &[FieldDescriptor] = &[
    field("deviceid", "Device ID", FieldKind::Text, true, ""),
    field("key", "API Key", FieldKind::Text, true, ""),
];

const OPEN_WRT: &[FieldDescriptor] = &[
    field("url", "API URL", FieldKind::Url, true, "http://10.0.0.244"),
    field("username", "Username", FieldKind::Text, true, ""),
    field("password", "Password", FieldKind::Password, true, ""),
    field("interfaceName", "Interface Name", FieldKind::Text, false, "br-lan"),
];

pub fn fields_for(kind: WidgetKind) -> &'static [FieldDescriptor] {
    match kind {
        WidgetKind::Emby | WidgetKind::Jellyfin => MEDIA_SERVER,
        WidgetKind::Qbittorrent | WidgetKind::Transmission => TORRENT_CLIENT,
        WidgetKind::CustomApi => CUSTOM_API,
        WidgetKind::HomeAssistant => HOME_ASSISTANT,
        WidgetKind::DiskStation => DISK_STATION,
        WidgetKind::Tailscale => TAILSCALE,
        WidgetKind::OpenWrt => OPEN_WRT,
    }
}

/// The service-level display mode only applies to customapi widgets
pub fn shows_display_mode(kind: Option<WidgetKind>) -> bool {
    kind == Some(WidgetKind::CustomApi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_has_required_fields() {
        for kind in WidgetKind::iter() {
            let fields = fields_for(kind);
            assert!(fields.iter().any(|f| f.required), "{} has no required field", kind);
        }
    }

    #[test]
    fn test_keys_unique_per_kind() {
        for kind in WidgetKind::iter() {
            let mut keys: Vec<&str> = fields_for(kind).iter().map(|f| f.key).collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate key in {}", kind);
        }
    }

    #[test]
    fn test_specific_descriptors() {
        let ha = fields_for(WidgetKind::HomeAssistant);
        assert_eq!(ha[1].label, "Access Token");
        assert_eq!(ha[2].kind, FieldKind::List);

        let custom = fields_for(WidgetKind::CustomApi);
        assert_eq!(custom[1].default, Some("GET"));
        assert!(shows_display_mode(Some(WidgetKind::CustomApi)));
        assert!(!shows_display_mode(Some(WidgetKind::Emby)));
        assert!(!shows_display_mode(None));
    }
}
