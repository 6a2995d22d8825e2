//! Request bodies built from the form.

use super::config::{CreateShape, ResourceConfig};
use super::form::{Attachment, FormMode, FormState};
use super::schema::FieldKind;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text { name: String, value: String },
    File { name: String, attachment: Attachment },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart(Vec<Part>),
}

/// A full-field submission of the form in its current mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub mode: FormMode,
    pub payload: Payload,
}

impl Payload {
    /// Multipart when the schema has a file-typed field, the create shape is
    /// a batch or a page image is attached; a JSON object otherwise. Every
    /// schema field is sent.
    pub fn build(config: &ResourceConfig, form: &FormState, mode: &FormMode) -> Payload {
        let page_image = match mode {
            FormMode::Create => page_image_parts(config, form),
            FormMode::Edit { .. } => Vec::new(),
        };

        if let (FormMode::Create, CreateShape::Batch { key }) = (mode, config.create_shape) {
            let rows = (0..form.row_count())
                .map(|row| Value::Object(json_fields(config, form, row)))
                .collect();
            let mut parts = vec![Part::Text {
                name: key.to_string(),
                value: Value::Array(rows).to_string(),
            }];
            parts.extend(file_parts(config, form));
            parts.extend(page_image);
            return Payload::Multipart(parts);
        }

        if !config.schema.has_files() && page_image.is_empty() {
            return Payload::Json(Value::Object(json_fields(config, form, 0)));
        }

        let mut parts: Vec<Part> = config
            .schema
            .value_fields()
            .map(|field| Part::Text {
                name: field.name.to_string(),
                value: form.value(field.name).to_string(),
            })
            .collect();
        parts.extend(file_parts(config, form));
        parts.extend(page_image);
        Payload::Multipart(parts)
    }
}

fn json_fields(config: &ResourceConfig, form: &FormState, row: usize) -> Map<String, Value> {
    config
        .schema
        .value_fields()
        .map(|field| {
            let raw = form.row_value(row, field.name);
            let value = match field.kind {
                FieldKind::Number => number_or_text(raw),
                _ => Value::String(raw.to_string()),
            };
            (field.name.to_string(), value)
        })
        .collect()
}

/// Numbers go out as JSON numbers when they parse; anything else is left
/// for the backend to reject.
fn number_or_text(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Value::from(integer);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn file_parts<'a>(config: &'a ResourceConfig, form: &'a FormState) -> impl Iterator<Item = Part> + 'a {
    config.schema.file_fields().flat_map(move |field| {
        form.pending(field.name).iter().map(move |file| Part::File {
            name: field.name.to_string(),
            attachment: file.attachment.clone(),
        })
    })
}

fn page_image_parts(config: &ResourceConfig, form: &FormState) -> Vec<Part> {
    let Some(image) = &config.page_image else {
        return Vec::new();
    };
    form.pending(image.part)
        .iter()
        .map(|file| Part::File {
            name: image.part.to_string(),
            attachment: file.attachment.clone(),
        })
        .collect()
}
