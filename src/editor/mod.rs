//! Service editor: declarative widget schema, generic form, add/edit state

pub mod form;
pub mod service_editor;
pub mod widget_schema;

pub use form::{FieldHandle, FieldSet, FieldValue};
pub use service_editor::{EditorMode, ServiceEditor, toggle_hidden};
pub use widget_schema::{FieldDescriptor, FieldKind, fields_for};
