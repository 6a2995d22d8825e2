//! Static description of one resource, built once per page.

use super::endpoints::{Endpoints, Envelope};
use super::schema::{FieldSpec, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    #[default]
    Collection,
    /// At most one record; the first listed record binds the form.
    Singleton,
}

/// Body layout of a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateShape {
    /// One part (or JSON key) per schema field.
    #[default]
    Fields,
    /// Multipart with a single part holding a JSON array of records.
    Batch { key: &'static str },
}

/// An image that belongs to the page rather than to a record. It is
/// uploaded with a create request and listed next to the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// Multipart part name of the upload.
    pub part: &'static str,
    pub label: &'static str,
    /// Key of the stored path in the list response body.
    pub response_key: &'static str,
    pub storage_prefix: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportColumn {
    pub header: &'static str,
    pub field: &'static str,
}

/// CSV export of the filtered collection. A 1-based `SNo` column is
/// always written first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpec {
    pub file_name: &'static str,
    pub columns: Vec<ExportColumn>,
}

pub const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    pub name: &'static str,
    pub label: &'static str,
    pub plural: &'static str,
    pub endpoints: Endpoints,
    pub list_envelope: Envelope,
    pub detail_envelope: Envelope,
    pub schema: Schema,
    pub cardinality: Cardinality,
    pub create_shape: CreateShape,
    pub search_fields: Vec<&'static str>,
    pub page_size: Option<usize>,
    pub export: Option<ExportSpec>,
    pub page_image: Option<PageImage>,
    pub delete_warning: &'static str,
}

impl ResourceConfig {
    pub fn builder(name: &'static str, label: &'static str) -> ResourceConfigBuilder {
        ResourceConfigBuilder {
            config: ResourceConfig {
                name,
                label,
                plural: name,
                endpoints: Endpoints::default(),
                list_envelope: Envelope::Bare,
                detail_envelope: Envelope::Bare,
                schema: Schema::default(),
                cardinality: Cardinality::Collection,
                create_shape: CreateShape::Fields,
                search_fields: Vec::new(),
                page_size: None,
                export: None,
                page_image: None,
                delete_warning: "You won't be able to revert this!",
            },
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.cardinality == Cardinality::Singleton
    }

    pub fn is_batch_create(&self) -> bool {
        matches!(self.create_shape, CreateShape::Batch { .. })
    }

    pub fn created_message(&self) -> String {
        format!("{} created successfully.", self.label)
    }

    pub fn updated_message(&self) -> String {
        format!("{} updated successfully.", self.label)
    }

    pub fn deleted_message(&self) -> String {
        format!("{} has been deleted.", self.label)
    }

    pub fn load_failed_message(&self) -> String {
        format!("Failed to fetch {}.", self.plural.to_lowercase())
    }

    /// Shown when a failed save carries no message from the backend.
    pub fn save_failed_message(&self) -> String {
        GENERIC_FAILURE.to_string()
    }

    pub fn delete_failed_message(&self) -> String {
        format!("Could not delete {}.", self.label.to_lowercase())
    }

    pub fn page_image_removed_message(&self) -> String {
        let label = self.page_image.as_ref().map_or("Image", |image| image.label);
        format!("{label} removed.")
    }

    pub fn page_image_failed_message(&self) -> String {
        let label = self.page_image.as_ref().map_or("image", |image| image.label);
        format!("Failed to delete {}.", label.to_lowercase())
    }

    pub fn confirm_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt {
            title: "Are you sure?".to_string(),
            text: self.delete_warning.to_string(),
            confirm_label: "Yes, delete it!".to_string(),
        }
    }
}

pub struct ResourceConfigBuilder {
    config: ResourceConfig,
}

impl ResourceConfigBuilder {
    pub fn plural(mut self, plural: &'static str) -> Self {
        self.config.plural = plural;
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    pub fn list_envelope(mut self, envelope: Envelope) -> Self {
        self.config.list_envelope = envelope;
        self
    }

    pub fn detail_envelope(mut self, envelope: Envelope) -> Self {
        self.config.detail_envelope = envelope;
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.config.schema.push(field);
        self
    }

    pub fn singleton(mut self) -> Self {
        self.config.cardinality = Cardinality::Singleton;
        self
    }

    pub fn batch_create(mut self, key: &'static str) -> Self {
        self.config.create_shape = CreateShape::Batch { key };
        self
    }

    pub fn searchable(mut self, fields: &[&'static str]) -> Self {
        self.config.search_fields = fields.to_vec();
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.config.page_size = Some(size);
        self
    }

    pub fn export(mut self, file_name: &'static str, columns: &[(&'static str, &'static str)]) -> Self {
        self.config.export = Some(ExportSpec {
            file_name,
            columns: columns
                .iter()
                .map(|&(header, field)| ExportColumn { header, field })
                .collect(),
        });
        self
    }

    pub fn page_image(mut self, image: PageImage) -> Self {
        self.config.page_image = Some(image);
        self
    }

    pub fn delete_warning(mut self, text: &'static str) -> Self {
        self.config.delete_warning = text;
        self
    }

    pub fn build(self) -> ResourceConfig {
        self.config
    }
}
