//! Form state of a resource page: field values, pending attachments and
//! the preview references created for them.

use super::Resource;
use super::schema::Schema;
use std::collections::BTreeMap;

/// Whether the form creates a new record or edits a bound one.
///
/// The identifier lives inside the `Edit` variant, so a form can never be
/// both unbound and editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn bound_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// A file picked by the user, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// An attachment waiting for submission, with its local preview reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub attachment: Attachment,
    pub preview: Option<String>,
}

/// Creates and releases local preview references (object URLs in the browser).
pub trait PreviewUrls {
    fn create(&mut self, attachment: &Attachment) -> Option<String>;
    fn revoke(&mut self, url: &str);
}

type Row = BTreeMap<String, String>;

/// Field values of a form. A batch create collects several rows; `values`
/// is always the first one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    values: Row,
    extra_rows: Vec<Row>,
    pending: BTreeMap<String, Vec<PendingFile>>,
    stored: BTreeMap<String, Vec<String>>,
}

fn default_row(schema: &Schema) -> Row {
    schema
        .value_fields()
        .map(|field| (field.name.to_string(), field.default.unwrap_or_default().to_string()))
        .collect()
}

impl FormState {
    /// Empty form holding the schema defaults.
    pub fn blank(schema: &Schema) -> Self {
        Self {
            values: default_row(schema),
            ..Self::default()
        }
    }

    /// Form bound to a record. File fields start without attachments; the
    /// record's stored images are kept for display only.
    pub fn from_record<R: Resource>(schema: &Schema, record: &R) -> Self {
        let values = schema
            .value_fields()
            .map(|field| {
                (
                    field.name.to_string(),
                    record.field_value(field.name).unwrap_or_default(),
                )
            })
            .collect();
        let stored = schema
            .file_fields()
            .map(|field| (field.name.to_string(), record.image_refs(field.name)))
            .collect();
        Self {
            values,
            extra_rows: Vec::new(),
            pending: BTreeMap::new(),
            stored,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn row_count(&self) -> usize {
        1 + self.extra_rows.len()
    }

    pub fn row_value(&self, row: usize, field: &str) -> &str {
        let values = match row {
            0 => Some(&self.values),
            _ => self.extra_rows.get(row - 1),
        };
        values
            .and_then(|values| values.get(field))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Returns `false` when the row does not exist.
    pub fn set_row_value(&mut self, row: usize, field: &str, value: impl Into<String>) -> bool {
        let values = match row {
            0 => Some(&mut self.values),
            _ => self.extra_rows.get_mut(row - 1),
        };
        match values {
            Some(values) => {
                values.insert(field.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    /// Appends a row holding the schema defaults.
    pub fn push_row(&mut self, schema: &Schema) {
        self.extra_rows.push(default_row(schema));
    }

    /// The first row always stays.
    pub fn remove_row(&mut self, row: usize) -> bool {
        if row == 0 || row > self.extra_rows.len() {
            return false;
        }
        self.extra_rows.remove(row - 1);
        true
    }

    /// Replaces the pending attachments of a field. Previews of the
    /// superseded selection are revoked before new ones are created.
    pub fn attach(&mut self, field: &str, files: Vec<Attachment>, previews: &mut dyn PreviewUrls) {
        if let Some(old) = self.pending.remove(field) {
            revoke_all(&old, previews);
        }
        if files.is_empty() {
            return;
        }
        let pending = files
            .into_iter()
            .map(|attachment| PendingFile {
                preview: previews.create(&attachment),
                attachment,
            })
            .collect();
        self.pending.insert(field.to_string(), pending);
    }

    pub fn pending(&self, field: &str) -> &[PendingFile] {
        self.pending.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn stored(&self, field: &str) -> &[String] {
        self.stored.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.values().any(|files| !files.is_empty())
    }

    /// Preview references still held by this form.
    pub fn live_previews(&self) -> impl Iterator<Item = &str> {
        self.pending
            .values()
            .flatten()
            .filter_map(|file| file.preview.as_deref())
    }

    /// Revokes every preview and drops the pending attachments.
    pub fn release_previews(&mut self, previews: &mut dyn PreviewUrls) {
        for files in std::mem::take(&mut self.pending).values() {
            revoke_all(files, previews);
        }
    }
}

fn revoke_all(files: &[PendingFile], previews: &mut dyn PreviewUrls) {
    for url in files.iter().filter_map(|file| file.preview.as_deref()) {
        previews.revoke(url);
    }
}
