//! Generic resource manager.
//!
//! Every content page of the console is an instance of the same pattern:
//! fetch a list, filter and page it locally, edit records through a
//! schema-driven form and delete them after a confirmation. A page is
//! described by a [`ResourceConfig`]; the behavior lives here once.
//!
//! Layers, from pure to effectful:
//! - [`schema`], [`endpoints`], [`config`]: the static description of a resource.
//! - [`search`], [`pagination`], [`form`], [`payload`]: pure helpers.
//! - [`state`]: the per-page state machine.
//! - [`client`]: typed calls over a [`Transport`].
//! - [`manager`]: sequential driver combining state, client and UI feedback.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod feedback;
pub mod form;
pub mod manager;
pub mod pagination;
pub mod payload;
pub mod search;
pub mod schema;
pub mod state;
pub mod transport;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use client::{Listing, ResourceClient};
pub use config::{
    Cardinality, ConfirmPrompt, CreateShape, ExportColumn, ExportSpec, PageImage, ResourceConfig,
};
pub use endpoints::{Endpoints, Envelope, Operation};
pub use feedback::{Feedback, Notice, NoticeLevel};
pub use form::{Attachment, FormMode, FormState, PendingFile, PreviewUrls};
pub use manager::ResourceManager;
pub use pagination::{PageItem, PageView};
pub use payload::{Part, Payload, Submission};
pub use schema::{CellStyle, FieldKind, FieldSpec, Schema};
pub use state::{Phase, ResourceState};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

/// A record type managed by the console.
///
/// Field access goes through the record's serde representation, so field
/// names are the wire names (`_id`, `createdAt`, ...) and a resource only
/// has to provide its configuration and identifier.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    fn config() -> ResourceConfig;

    fn id(&self) -> &str;

    /// Textual value of a field, `None` when the field is absent or null.
    fn field_value(&self, field: &str) -> Option<String> {
        match serde_json::to_value(self).ok()? {
            Value::Object(map) => map.get(field).and_then(value_text),
            _ => None,
        }
    }

    /// Stored image references of an `Image` or `ImageList` field.
    fn image_refs(&self, field: &str) -> Vec<String> {
        let Ok(Value::Object(map)) = serde_json::to_value(self) else {
            return Vec::new();
        };
        match map.get(field) {
            Some(Value::String(path)) if !path.is_empty() => vec![path.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .filter(|path| !path.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
