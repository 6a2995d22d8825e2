use async_trait::async_trait;
use common::config::AppConfig;
use common::error::ClientError;
use common::resource::{ApiRequest, ApiResponse, Method, Part, Payload, Transport};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::previews::attachment_blob;

/// `fetch`-backed transport resolving every path against the configured
/// API base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: Rc<AppConfig>,
}

impl HttpTransport {
    pub fn new(config: Rc<AppConfig>) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self.config.api_url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let prepared = match request.payload {
            None => builder.build(),
            Some(Payload::Json(value)) => builder.json(&value),
            Some(Payload::Multipart(parts)) => builder.body(form_data(&parts)?),
        }
        .map_err(|err| ClientError::Transport(err.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

/// Multipart body; the browser sets the boundary header itself.
fn form_data(parts: &[Part]) -> Result<FormData, ClientError> {
    let form = FormData::new().map_err(js_error)?;
    for part in parts {
        match part {
            Part::Text { name, value } => form.append_with_str(name, value).map_err(js_error)?,
            Part::File { name, attachment } => {
                let blob = attachment_blob(attachment).map_err(js_error)?;
                form.append_with_blob_and_filename(name, &blob, &attachment.file_name)
                    .map_err(js_error)?
            }
        }
    }
    Ok(form)
}

fn js_error(err: JsValue) -> ClientError {
    ClientError::Transport(
        err.as_string()
            .unwrap_or_else(|| "browser rejected the request body".to_string()),
    )
}
