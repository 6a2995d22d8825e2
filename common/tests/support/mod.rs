//! In-memory backend and UI doubles for driving a `ResourceManager`.

#![allow(dead_code)]

use async_trait::async_trait;
use common::error::ClientError;
use common::resource::{
    ApiRequest, ApiResponse, Attachment, ConfirmPrompt, Envelope, Feedback, Method, Notice,
    Operation, Part, Payload, PreviewUrls, Resource, ResourceConfig, Transport,
};
use serde_json::{Map, Value, json};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Default)]
struct Store {
    records: Vec<Value>,
    requests: Vec<ApiRequest>,
    next_id: usize,
    failure: Option<(u16, String)>,
    offline: bool,
    page_image: Option<String>,
}

/// REST backend for a single resource. Clones share the same store.
#[derive(Clone)]
pub struct FakeBackend {
    config: Rc<ResourceConfig>,
    store: Rc<RefCell<Store>>,
}

impl FakeBackend {
    pub fn for_resource<R: Resource>(records: Vec<Value>) -> Self {
        let store = Store {
            next_id: records.len() + 1,
            records,
            ..Store::default()
        };
        Self {
            config: Rc::new(R::config()),
            store: Rc::new(RefCell::new(store)),
        }
    }

    pub fn with_page_image(self, path: &str) -> Self {
        self.store.borrow_mut().page_image = Some(path.to_string());
        self
    }

    pub fn page_image(&self) -> Option<String> {
        self.store.borrow().page_image.clone()
    }

    pub fn records(&self) -> Vec<Value> {
        self.store.borrow().records.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.store.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.store.borrow().requests.len()
    }

    /// The next request answers with this status and JSON `message`.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.store.borrow_mut().failure = Some((status, message.to_string()));
    }

    pub fn set_offline(&self, offline: bool) {
        self.store.borrow_mut().offline = offline;
    }

    fn list_body(&self, records: Vec<Value>, page_image: Option<String>) -> Value {
        let mut body = wrap(self.config.list_envelope, Value::Array(records));
        if let (Some(image), Some(path), Value::Object(map)) =
            (&self.config.page_image, page_image, &mut body)
        {
            map.insert(image.response_key.to_string(), Value::String(path));
        }
        body
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut store = self.store.borrow_mut();
        if let Some((status, message)) = store.failure.take() {
            return respond(status, json!({ "message": message }));
        }
        let tail = request.path.rsplit('/').next().unwrap_or_default().to_string();

        match request.method {
            Method::Get if request.path.ends_with(list_path(&self.config)) => {
                respond(200, self.list_body(store.records.clone(), store.page_image.clone()))
            }
            Method::Get => match find(&store.records, &tail) {
                Some(record) => respond(200, wrap(self.config.detail_envelope, record.clone())),
                None => respond(404, json!({ "message": "Not found" })),
            },
            Method::Post => {
                if let Some(path) = uploaded_page_image(&self.config, request.payload.as_ref()) {
                    store.page_image = Some(path);
                }
                for mut fields in created_objects(request.payload.as_ref()) {
                    let id = format!("gen-{}", store.next_id);
                    store.next_id += 1;
                    fields.insert("_id".into(), Value::String(id));
                    store.records.push(Value::Object(fields));
                }
                respond(201, json!({ "message": "created" }))
            }
            Method::Put => {
                let Some(index) = position(&store.records, &tail) else {
                    return respond(404, json!({ "message": "Not found" }));
                };
                if let Value::Object(record) = &mut store.records[index] {
                    record.extend(payload_fields(request.payload.as_ref()));
                }
                respond(200, json!({ "message": "updated" }))
            }
            Method::Delete
                if Some(request.path.as_str())
                    == self.config.endpoints.template(Operation::RemovePageImage) =>
            {
                match store.page_image.take() {
                    Some(_) => respond(200, json!({ "message": "image removed" })),
                    None => respond(404, json!({ "message": "No image" })),
                }
            }
            Method::Delete => match position(&store.records, &tail) {
                Some(index) => {
                    store.records.remove(index);
                    respond(200, json!({ "message": "deleted" }))
                }
                None => respond(404, json!({ "message": "Not found" })),
            },
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        if self.store.borrow().offline {
            self.store.borrow_mut().requests.push(request);
            return Err(ClientError::Transport("connection refused".into()));
        }
        let response = self.handle(&request);
        self.store.borrow_mut().requests.push(request);
        Ok(response)
    }
}

fn list_path(config: &ResourceConfig) -> &'static str {
    config.endpoints.template(Operation::List).unwrap_or("/")
}

fn uploaded_page_image(config: &ResourceConfig, payload: Option<&Payload>) -> Option<String> {
    let image = config.page_image.as_ref()?;
    let Some(Payload::Multipart(parts)) = payload else {
        return None;
    };
    parts.iter().find_map(|part| match part {
        Part::File { name, attachment } if name == image.part => {
            Some(format!("/uploads/{}", attachment.file_name))
        }
        _ => None,
    })
}

fn wrap(envelope: Envelope, body: Value) -> Value {
    match envelope {
        Envelope::Bare => body,
        Envelope::Keyed(key) => {
            let mut map = Map::new();
            map.insert(key.to_string(), body);
            Value::Object(map)
        }
    }
}

fn respond(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string(),
    }
}

fn find<'a>(records: &'a [Value], id: &str) -> Option<&'a Value> {
    records.iter().find(|record| record["_id"] == id)
}

fn position(records: &[Value], id: &str) -> Option<usize> {
    records.iter().position(|record| record["_id"] == id)
}

/// Text parts become string fields; file parts are stored as
/// `/uploads/<file name>` like the real backend does.
fn payload_fields(payload: Option<&Payload>) -> Map<String, Value> {
    match payload {
        Some(Payload::Json(Value::Object(map))) => map.clone(),
        Some(Payload::Multipart(parts)) => {
            let mut fields = Map::new();
            for part in parts {
                match part {
                    Part::Text { name, value } => {
                        fields.insert(name.clone(), Value::String(value.clone()));
                    }
                    Part::File { name, attachment } => {
                        fields.insert(
                            name.clone(),
                            Value::String(format!("/uploads/{}", attachment.file_name)),
                        );
                    }
                }
            }
            fields
        }
        _ => Map::new(),
    }
}

/// A batch part (a JSON array under one text field) creates one record per
/// element; anything else creates a single record.
fn created_objects(payload: Option<&Payload>) -> Vec<Map<String, Value>> {
    if let Some(Payload::Multipart(parts)) = payload {
        for part in parts {
            if let Part::Text { value, .. } = part {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(value) {
                    return items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::Object(map) => Some(map),
                            _ => None,
                        })
                        .collect();
                }
            }
        }
    }
    vec![payload_fields(payload)]
}

/// Records notices and answers confirmations with a fixed choice; hands out
/// numbered `blob:` preview URLs and tracks which are still live.
pub struct FakeUi {
    pub notices: Vec<Notice>,
    pub prompts: Vec<ConfirmPrompt>,
    pub accept: bool,
    live: BTreeSet<String>,
    issued: usize,
}

impl FakeUi {
    pub fn accepting() -> Self {
        Self {
            notices: Vec::new(),
            prompts: Vec::new(),
            accept: true,
            live: BTreeSet::new(),
            issued: 0,
        }
    }

    pub fn declining() -> Self {
        Self {
            accept: false,
            ..Self::accepting()
        }
    }

    pub fn live_previews(&self) -> usize {
        self.live.len()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Feedback for FakeUi {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
        self.prompts.push(prompt.clone());
        self.accept
    }
}

impl PreviewUrls for FakeUi {
    fn create(&mut self, _attachment: &Attachment) -> Option<String> {
        self.issued += 1;
        let url = format!("blob:preview-{}", self.issued);
        self.live.insert(url.clone());
        Some(url)
    }

    fn revoke(&mut self, url: &str) {
        self.live.remove(url);
    }
}

pub fn png(name: &str) -> Attachment {
    Attachment::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}
