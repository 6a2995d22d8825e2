//! Endpoint templates of a resource and the envelopes its responses use.

use serde_json::Value;
use std::fmt;

/// Placeholder replaced by the record identifier in templates.
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Detail,
    Create,
    Update,
    Delete,
    /// Removes the page image, see [`PageImage`](super::config::PageImage).
    RemovePageImage,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Detail => "detail",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::RemovePageImage => "remove page image",
        };
        f.write_str(name)
    }
}

/// Where the payload sits inside a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Envelope {
    /// The body is the payload.
    #[default]
    Bare,
    /// The payload is under the given key, e.g. `{ "banners": [...] }`.
    Keyed(&'static str),
}

impl Envelope {
    pub fn open(self, body: Value) -> Option<Value> {
        match self {
            Envelope::Bare => Some(body),
            Envelope::Keyed(key) => match body {
                Value::Object(mut map) => map.remove(key),
                _ => None,
            },
        }
    }
}

/// Path templates, relative to the API base URL.
///
/// A missing template means the resource does not support the operation;
/// the UI hides the matching action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoints {
    list: Option<&'static str>,
    detail: Option<&'static str>,
    create: Option<&'static str>,
    update: Option<&'static str>,
    delete: Option<&'static str>,
    remove_page_image: Option<&'static str>,
}

impl Endpoints {
    pub fn new(list: &'static str) -> Self {
        Self {
            list: Some(list),
            ..Self::default()
        }
    }

    pub fn detail(mut self, template: &'static str) -> Self {
        self.detail = Some(template);
        self
    }

    pub fn create(mut self, template: &'static str) -> Self {
        self.create = Some(template);
        self
    }

    pub fn update(mut self, template: &'static str) -> Self {
        self.update = Some(template);
        self
    }

    pub fn delete(mut self, template: &'static str) -> Self {
        self.delete = Some(template);
        self
    }

    pub fn remove_page_image(mut self, path: &'static str) -> Self {
        self.remove_page_image = Some(path);
        self
    }

    pub fn template(&self, operation: Operation) -> Option<&'static str> {
        match operation {
            Operation::List => self.list,
            Operation::Detail => self.detail,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
            Operation::RemovePageImage => self.remove_page_image,
        }
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.template(operation).is_some()
    }

    /// Concrete path for an operation. `None` when the operation is not
    /// configured, or when its template needs an identifier and none is given.
    pub fn path(&self, operation: Operation, id: Option<&str>) -> Option<String> {
        let template = self.template(operation)?;
        if !template.contains(ID_PLACEHOLDER) {
            return Some(template.to_string());
        }
        id.map(|id| template.replace(ID_PLACEHOLDER, id))
    }
}
