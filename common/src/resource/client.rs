//! Typed backend calls for one resource.

use super::Resource;
use super::config::ResourceConfig;
use super::endpoints::Operation;
use super::form::FormMode;
use super::payload::{Payload, Submission};
use super::transport::{ApiRequest, Method, Transport};
use crate::error::ClientError;
use serde_json::Value;
use std::rc::Rc;

/// A fetched collection plus the page image listed next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<R> {
    pub records: Vec<R>,
    pub page_image: Option<String>,
}

impl<R> Default for Listing<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            page_image: None,
        }
    }
}

impl<R> From<Vec<R>> for Listing<R> {
    fn from(records: Vec<R>) -> Self {
        Self {
            records,
            page_image: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    transport: T,
    config: Rc<ResourceConfig>,
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(transport: T, config: Rc<ResourceConfig>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the whole collection. A body without the expected list is
    /// an empty collection, not an error.
    pub async fn list<R: Resource>(&self) -> Result<Listing<R>, ClientError> {
        let body = self.call(Method::Get, Operation::List, None, None).await?;
        if body.trim().is_empty() {
            return Ok(Listing::default());
        }
        let value: Value = serde_json::from_str(&body)?;
        let page_image = self
            .config
            .page_image
            .as_ref()
            .and_then(|image| value.get(image.response_key))
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
            .map(str::to_string);
        let records = match self.config.list_envelope.open(value) {
            Some(items @ Value::Array(_)) => serde_json::from_value(items)?,
            _ => {
                log::warn!("{}: list response has no array, treating as empty", self.config.name);
                Vec::new()
            }
        };
        Ok(Listing { records, page_image })
    }

    pub async fn fetch<R: Resource>(&self, id: &str) -> Result<R, ClientError> {
        let body = self
            .call(Method::Get, Operation::Detail, Some(id), None)
            .await?;
        let value: Value = serde_json::from_str(&body)?;
        let record = self
            .config
            .detail_envelope
            .open(value)
            .ok_or_else(|| ClientError::Decode(format!("{} detail envelope missing", self.config.name)))?;
        Ok(serde_json::from_value(record)?)
    }

    /// POSTs in create mode, PUTs to the bound identifier in edit mode.
    pub async fn submit(&self, submission: Submission) -> Result<(), ClientError> {
        let Submission { mode, payload } = submission;
        match mode {
            FormMode::Create => {
                self.call(Method::Post, Operation::Create, None, Some(payload))
                    .await?;
            }
            FormMode::Edit { id } => {
                self.call(Method::Put, Operation::Update, Some(&id), Some(payload))
                    .await?;
            }
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.call(Method::Delete, Operation::Delete, Some(id), None)
            .await?;
        Ok(())
    }

    pub async fn remove_page_image(&self) -> Result<(), ClientError> {
        self.call(Method::Delete, Operation::RemovePageImage, None, None)
            .await?;
        Ok(())
    }

    async fn call(
        &self,
        method: Method,
        operation: Operation,
        id: Option<&str>,
        payload: Option<Payload>,
    ) -> Result<String, ClientError> {
        let endpoints = &self.config.endpoints;
        if !endpoints.supports(operation) {
            return Err(ClientError::MissingEndpoint {
                resource: self.config.name,
                operation,
            });
        }
        let path = endpoints.path(operation, id).ok_or(ClientError::Unbound)?;

        log::debug!("{} {} ({} {})", method, path, self.config.name, operation);
        let response = self
            .transport
            .send(ApiRequest {
                method,
                path,
                payload,
            })
            .await?;

        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::Server {
                status: response.status,
                message: server_message(&response.body),
            })
        }
    }
}

/// The `message` field of a JSON error body, else the raw body text.
fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
